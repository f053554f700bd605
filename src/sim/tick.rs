//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically: paddle
//! motion, ball integration, collision response, lives and phase transitions.

use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Held-key input flags for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => return,
        GamePhase::Running => {}
    }

    state.time_ticks += 1;

    move_paddle(state, input);
    move_ball(state);
    check_brick_hits(state);
}

/// Slide the paddle by its speed; right intent wins when both keys are held
fn move_paddle(state: &mut GameState, input: &TickInput) {
    if input.move_right && state.paddle.x + PADDLE_WIDTH < PLAYFIELD_WIDTH {
        state.paddle.x += PADDLE_SPEED;
    } else if input.move_left && state.paddle.x > 0.0 {
        state.paddle.x -= PADDLE_SPEED;
    }
    state.paddle.x = state.paddle.x.clamp(0.0, PLAYFIELD_WIDTH - PADDLE_WIDTH);
}

/// Integrate the ball one step and resolve wall, paddle and floor contact.
///
/// Wall reflection tests the projected next position rather than the
/// committed one, so the bounce lands on the frame before the edge would be
/// crossed and the ball never visibly clips a wall.
fn move_ball(state: &mut GameState) {
    state.ball.pos += state.ball.vel;

    let r = state.ball.radius;

    let next_x = state.ball.pos.x + state.ball.vel.x;
    if next_x > PLAYFIELD_WIDTH - r || next_x < r {
        state.ball.vel.x = -state.ball.vel.x;
    }

    let next_y = state.ball.pos.y + state.ball.vel.y;
    if next_y < r {
        state.ball.vel.y = -state.ball.vel.y;
    } else if next_y > PLAYFIELD_HEIGHT - r {
        let paddle = state.paddle.rect();
        if state.ball.pos.x > paddle.left() && state.ball.pos.x < paddle.right() {
            // Saved. Every save speeds the ball up a notch until the cap.
            state.ball.vel.y = -state.ball.vel.y;
            if state.ball.vel.x.abs() < BALL_SPEED_CAP {
                state.ball.vel *= PADDLE_BOOST;
            }
        } else {
            lose_ball(state);
        }
    }
}

fn lose_ball(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    log::info!("ball lost, {} lives left", state.lives);
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("game over, final score {}", state.score);
    } else {
        state.serve_ball();
    }
}

/// Destroy the first alive brick containing the ball center, if any.
///
/// This is a center-point test with strict bounds, not circle-rect overlap:
/// a glancing pass whose center never enters the cell leaves it standing.
fn check_brick_hits(state: &mut GameState) {
    for brick in &mut state.bricks {
        if !brick.alive {
            continue;
        }
        if brick.rect().contains_point(state.ball.pos) {
            brick.alive = false;
            state.score += brick.kind.points();
            state.ball.vel.y = -state.ball.vel.y;
            log::debug!(
                "brick ({}, {}) destroyed, score {}",
                brick.row,
                brick.col,
                state.score
            );
            break;
        }
    }
    // TODO: decide what clearing the last brick should do; today the ball
    // just keeps bouncing around an empty grid
}
