//! Game state and core simulation types
//!
//! Everything the tick function mutates lives here; presentation layers only
//! ever read it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Attract screen, simulation frozen
    Menu,
    /// Active gameplay
    Running,
    /// Run ended, final score on display
    GameOver,
}

/// Brick tiers, cheapest to most valuable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickKind {
    Dirt,
    Stone,
    Gold,
    Diamond,
}

impl BrickKind {
    /// Tier for a grid row; row 0 is the top (and most valuable) row
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => BrickKind::Diamond,
            1 => BrickKind::Gold,
            2 => BrickKind::Stone,
            _ => BrickKind::Dirt,
        }
    }

    /// Score awarded for destroying a brick of this tier
    pub fn points(self) -> u32 {
        match self {
            BrickKind::Dirt => 10,
            BrickKind::Stone => 20,
            BrickKind::Gold => 30,
            BrickKind::Diamond => 50,
        }
    }
}

/// One cell of the brick grid
#[derive(Debug, Clone, Copy)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
    pub kind: BrickKind,
    pub alive: bool,
}

impl Brick {
    /// Screen rectangle for this cell, derived from the grid layout
    pub fn rect(&self) -> Rect {
        Rect::new(
            BRICK_OFFSET_LEFT + self.col as f32 * (BRICK_WIDTH + BRICK_PADDING),
            BRICK_OFFSET_TOP + self.row as f32 * (BRICK_HEIGHT + BRICK_PADDING),
            BRICK_WIDTH,
            BRICK_HEIGHT,
        )
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Left edge x position
    pub x: f32,
    /// Top edge y position (fixed height above the bottom)
    pub y: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (PLAYFIELD_WIDTH - PADDLE_WIDTH) / 2.0,
            y: PADDLE_Y,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Snap back to the middle of the playfield (after a lost ball)
    pub fn recenter(&mut self) {
        self.x = (PLAYFIELD_WIDTH - PADDLE_WIDTH) / 2.0;
    }
}

/// The ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity in pixels per step
    pub vel: Vec2,
    pub radius: f32,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only draw is the serve direction
    pub rng: Pcg32,
    /// Player lives
    pub lives: u8,
    /// Score
    pub score: u32,
    /// Simulation step counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major grid; destroyed cells stay in place with `alive` cleared
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Create a new session sitting on the attract screen
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: STARTING_LIVES,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Menu,
            paddle: Paddle::default(),
            ball: Ball {
                pos: Vec2::new(PLAYFIELD_WIDTH / 2.0, BALL_SPAWN_Y),
                vel: Vec2::new(BALL_SERVE_SPEED, -BALL_SERVE_SPEED),
                radius: BALL_RADIUS,
            },
            bricks: Vec::with_capacity(BRICK_ROWS * BRICK_COLS),
        };
        state.fill_brick_grid();
        state
    }

    /// Start (or restart) a round. Total over all phases: score, lives, the
    /// brick grid and both entities are reset regardless of where the session
    /// currently sits.
    pub fn start_round(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.time_ticks = 0;
        self.fill_brick_grid();
        self.serve_ball();
        self.phase = GamePhase::Running;
        log::info!("round started (seed {})", self.seed);
    }

    /// Put the ball back above the paddle and serve it upward, with the
    /// horizontal direction drawn from the session RNG
    pub fn serve_ball(&mut self) {
        let dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.pos = Vec2::new(PLAYFIELD_WIDTH / 2.0, BALL_SERVE_Y);
        self.ball.vel = Vec2::new(BALL_SERVE_SPEED * dir, -BALL_SERVE_SPEED);
        self.paddle.recenter();
    }

    /// Bricks still standing this round
    pub fn alive_brick_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    fn fill_brick_grid(&mut self) {
        self.bricks.clear();
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                self.bricks.push(Brick {
                    row,
                    col,
                    kind: BrickKind::for_row(row),
                    alive: true,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_on_menu() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.bricks.len(), BRICK_ROWS * BRICK_COLS);
        assert_eq!(state.alive_brick_count(), 45);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 550.0));
    }

    #[test]
    fn test_brick_tiers_by_row() {
        assert_eq!(BrickKind::for_row(0), BrickKind::Diamond);
        assert_eq!(BrickKind::for_row(1), BrickKind::Gold);
        assert_eq!(BrickKind::for_row(2), BrickKind::Stone);
        assert_eq!(BrickKind::for_row(3), BrickKind::Dirt);
        assert_eq!(BrickKind::for_row(4), BrickKind::Dirt);

        assert_eq!(BrickKind::Diamond.points(), 50);
        assert_eq!(BrickKind::Gold.points(), 30);
        assert_eq!(BrickKind::Stone.points(), 20);
        assert_eq!(BrickKind::Dirt.points(), 10);
    }

    #[test]
    fn test_brick_grid_layout() {
        let state = GameState::new(1);

        let first = state.bricks[0].rect();
        assert_eq!(first.x, 25.0);
        assert_eq!(first.y, 50.0);

        // Last cell (row 4, col 8) still fits inside the playfield
        let last = state.bricks[BRICK_ROWS * BRICK_COLS - 1].rect();
        assert_eq!(last.x, 25.0 + 8.0 * 85.0);
        assert_eq!(last.y, 50.0 + 4.0 * 40.0);
        assert!(last.right() < PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_serve_ball_recenters() {
        let mut state = GameState::new(7);
        state.paddle.x = 0.0;
        state.serve_ball();

        assert_eq!(state.ball.pos, Vec2::new(400.0, BALL_SERVE_Y));
        assert_eq!(state.ball.vel.y, -BALL_SERVE_SPEED);
        assert_eq!(state.ball.vel.x.abs(), BALL_SERVE_SPEED);
        assert_eq!(state.paddle.x, (PLAYFIELD_WIDTH - PADDLE_WIDTH) / 2.0);
    }

    #[test]
    fn test_start_round_is_total() {
        let mut state = GameState::new(99);
        state.score = 480;
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        for brick in &mut state.bricks {
            brick.alive = false;
        }

        state.start_round();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.alive_brick_count(), 45);
    }
}
