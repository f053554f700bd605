//! Minecraftoid - a Minecraft-themed Breakout clone
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Canvas 2D presentation with sprite fallbacks
//! - `platform`: Browser frame-loop plumbing

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod render;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; velocities are in pixels per step)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Paddle top edge sits 30px above the bottom of the playfield
    pub const PADDLE_Y: f32 = PLAYFIELD_HEIGHT - 30.0;
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SERVE_SPEED: f32 = 5.0;
    /// Speed boost on every paddle save (multiplicative)
    pub const PADDLE_BOOST: f32 = 1.05;
    /// No further boost once |dx| reaches this
    pub const BALL_SPEED_CAP: f32 = 10.0;

    /// Ball rest heights: on the attract screen vs. after an in-round serve
    pub const BALL_SPAWN_Y: f32 = PLAYFIELD_HEIGHT - 50.0;
    pub const BALL_SERVE_Y: f32 = PLAYFIELD_HEIGHT - 30.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 9;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 50.0;
    pub const BRICK_OFFSET_LEFT: f32 = 25.0;

    /// Lives per round
    pub const STARTING_LIVES: u8 = 3;
}
