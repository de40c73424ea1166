//! Two canvas effects for a landing page: a pointer-reactive "code
//! constellation" of syntax glyphs and a warp-speed starfield.
//!
//! The simulations (`glyph`, `starfield`) are plain Rust and run anywhere;
//! the browser glue lives in the wasm32-only `wasm` module.

pub mod config;
pub mod error;
pub mod frame;
pub mod glyph;
pub mod pointer;
pub mod starfield;
pub mod surface;
pub mod viewport;

pub use glam::Vec2;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod canvas;
    mod dom;
    mod glyph;
    mod scheduler;
    mod starfield;

    pub use dom::attached_listeners;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&"logger already installed".into());
        }
    }

    /// Start the hero glyph field. Does nothing if `#hero-canvas` is missing.
    #[wasm_bindgen(js_name = startGlyphField)]
    pub fn start_glyph_field() {
        if let Err(err) = glyph::start() {
            log::warn!("glyph field disabled: {}", err);
        }
    }

    /// Start the contact starfield. Does nothing if `#contact-canvas` is missing.
    #[wasm_bindgen(js_name = startWarpStarfield)]
    pub fn start_warp_starfield() {
        if let Err(err) = starfield::start() {
            log::warn!("starfield disabled: {}", err);
        }
    }

    #[wasm_bindgen(js_name = stopGlyphField)]
    pub fn stop_glyph_field() -> bool {
        glyph::stop()
    }

    #[wasm_bindgen(js_name = stopWarpStarfield)]
    pub fn stop_warp_starfield() -> bool {
        starfield::stop()
    }

    #[wasm_bindgen(js_name = isGlyphFieldRunning)]
    pub fn is_glyph_field_running() -> bool {
        glyph::is_running()
    }

    #[wasm_bindgen(js_name = isWarpStarfieldRunning)]
    pub fn is_warp_starfield_running() -> bool {
        starfield::is_running()
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    attached_listeners, is_glyph_field_running, is_warp_starfield_running, start_glyph_field,
    start_warp_starfield, stop_glyph_field, stop_warp_starfield,
};
