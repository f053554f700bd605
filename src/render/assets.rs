//! Sprite store with per-sprite readiness checks
//!
//! Images start fetching at boot. Until one is decoded, draws of it fall back
//! to a flat-color primitive, so the game stays playable with no assets
//! served at all.

use std::cell::Cell;

use wasm_bindgen::JsValue;
use web_sys::HtmlImageElement;

use crate::sim::BrickKind;

/// One drawable image plus its flat-color stand-in
pub struct Sprite {
    image: HtmlImageElement,
    path: &'static str,
    /// CSS color painted until the image is ready
    pub fallback: &'static str,
    warned: Cell<bool>,
}

impl Sprite {
    fn load(path: &'static str, fallback: &'static str) -> Result<Sprite, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(path);
        Ok(Sprite {
            image,
            path,
            fallback,
            warned: Cell::new(false),
        })
    }

    /// True once the image has decoded and is usable for drawing. A fetch
    /// that finished broken is reported once, then painted as the fallback
    /// color from there on.
    pub fn ready(&self) -> bool {
        if self.image.complete() {
            if self.image.natural_width() > 0 {
                return true;
            }
            if !self.warned.replace(true) {
                log::warn!("sprite {} failed to load, using fallback color", self.path);
            }
        }
        false
    }

    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }
}

/// Every sprite the game draws
pub struct Sprites {
    pub background: Sprite,
    pub paddle: Sprite,
    pub ball: Sprite,
    pub dirt: Sprite,
    pub stone: Sprite,
    pub gold: Sprite,
    pub diamond: Sprite,
}

impl Sprites {
    /// Kick off fetches for the whole sprite set
    pub fn load() -> Result<Sprites, JsValue> {
        Ok(Sprites {
            background: Sprite::load("assets/background.png", "#222222")?,
            paddle: Sprite::load("assets/paddle.png", "#8B4513")?,
            ball: Sprite::load("assets/ball.png", "#00FF00")?,
            dirt: Sprite::load("assets/dirt.png", "#8B5A2B")?,
            stone: Sprite::load("assets/stone.png", "#8A8A8A")?,
            gold: Sprite::load("assets/gold_ore.png", "#F5C542")?,
            diamond: Sprite::load("assets/diamond_ore.png", "#5FD9D5")?,
        })
    }

    pub fn for_brick(&self, kind: BrickKind) -> &Sprite {
        match kind {
            BrickKind::Dirt => &self.dirt,
            BrickKind::Stone => &self.stone,
            BrickKind::Gold => &self.gold,
            BrickKind::Diamond => &self.diamond,
        }
    }
}
