//! Frame drawing
//!
//! One full repaint per call: background, then (outside the menu) the brick
//! grid, paddle and ball. The background is opaque and covers the canvas, so
//! no separate clear is needed.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::{GamePhase, GameState, Rect};

use super::assets::{Sprite, Sprites};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    pub sprites: Sprites,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, sprites: Sprites) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, sprites })
    }

    /// Repaint the whole frame from the current state
    pub fn render(&self, state: &GameState) {
        self.draw_background();
        if state.phase != GamePhase::Menu {
            self.draw_bricks(state);
            self.draw_paddle(state);
            self.draw_ball(state);
        }
    }

    fn draw_background(&self) {
        let sprite = &self.sprites.background;
        if sprite.ready() {
            let _ = self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    sprite.image(),
                    0.0,
                    0.0,
                    PLAYFIELD_WIDTH as f64,
                    PLAYFIELD_HEIGHT as f64,
                );
        } else {
            self.ctx.set_fill_style_str(sprite.fallback);
            self.ctx
                .fill_rect(0.0, 0.0, PLAYFIELD_WIDTH as f64, PLAYFIELD_HEIGHT as f64);
        }
    }

    fn draw_bricks(&self, state: &GameState) {
        for brick in state.bricks.iter().filter(|b| b.alive) {
            self.draw_sprite_rect(self.sprites.for_brick(brick.kind), brick.rect());
        }
    }

    fn draw_paddle(&self, state: &GameState) {
        self.draw_sprite_rect(&self.sprites.paddle, state.paddle.rect());
    }

    fn draw_ball(&self, state: &GameState) {
        let ball = &state.ball;
        let sprite = &self.sprites.ball;
        if sprite.ready() {
            let _ = self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    sprite.image(),
                    (ball.pos.x - ball.radius) as f64,
                    (ball.pos.y - ball.radius) as f64,
                    (ball.radius * 2.0) as f64,
                    (ball.radius * 2.0) as f64,
                );
        } else {
            self.ctx.set_fill_style_str(sprite.fallback);
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                ball.pos.x as f64,
                ball.pos.y as f64,
                ball.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }
    }

    fn draw_sprite_rect(&self, sprite: &Sprite, rect: Rect) {
        if sprite.ready() {
            let _ = self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    sprite.image(),
                    rect.x as f64,
                    rect.y as f64,
                    rect.width as f64,
                    rect.height as f64,
                );
        } else {
            self.ctx.set_fill_style_str(sprite.fallback);
            self.ctx.fill_rect(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }
    }
}
