use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use crate::surface::{GlyphText, LineStyle, Surface};

fn px(v: f32) -> f64 {
    f64::from(v)
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, px(width), px(height));
    }

    fn fill(&mut self, color: &'static str, width: f32, height: f32) {
        self.set_global_alpha(1.0);
        self.set_fill_style_str(color);
        self.fill_rect(0.0, 0.0, px(width), px(height));
    }

    fn draw_glyph(&mut self, glyph: &GlyphText<'_>) {
        self.set_font(&glyph.font());
        self.set_fill_style_str(glyph.color);
        self.set_global_alpha(px(glyph.alpha));
        if let Err(err) = self.fill_text(glyph.text, px(glyph.position.x), px(glyph.position.y)) {
            log::trace!("fillText failed: {:?}", err);
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) {
        self.begin_path();
        self.move_to(px(from.x), px(from.y));
        self.line_to(px(to.x), px(to.y));
        self.set_stroke_style_str(style.color);
        self.set_global_alpha(px(style.alpha));
        self.set_line_width(px(style.width));
        self.stroke();
    }
}
