//! Canvas 2D presentation layer
//!
//! Draws a `GameState` snapshot each frame. The simulation never looks in
//! here; sprite readiness only ever changes what gets painted, not what
//! happens.

pub mod assets;
pub mod canvas;

pub use assets::{Sprite, Sprites};
pub use canvas::CanvasRenderer;
