//! Drawing seam between the simulations and whatever paints them.
//!
//! The browser build implements [`Surface`] for `CanvasRenderingContext2d`;
//! [`Recorder`] captures the same calls for headless use and tests.

use glam::Vec2;

/// Stroke parameters for a single straight line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: &'static str,
    pub alpha: f32,
    pub width: f32,
}

/// A glyph to be painted as text, baseline-anchored at `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphText<'a> {
    pub text: &'a str,
    pub position: Vec2,
    pub size: f32,
    pub font_family: &'a str,
    pub color: &'static str,
    pub alpha: f32,
}

impl GlyphText<'_> {
    /// CSS font shorthand, e.g. `11.5px "Courier New", monospace`.
    pub fn font(&self) -> String {
        format!("{}px {}", self.size, self.font_family)
    }
}

pub trait Surface {
    /// Erase to transparent.
    fn clear(&mut self, width: f32, height: f32);

    /// Paint the whole area with an opaque colour.
    fn fill(&mut self, color: &'static str, width: f32, height: f32);

    fn draw_glyph(&mut self, glyph: &GlyphText<'_>);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Fill {
        color: &'static str,
        width: f32,
        height: f32,
    },
    Glyph {
        text: String,
        position: Vec2,
        font: String,
        color: &'static str,
        alpha: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        style: LineStyle,
    },
}

/// Surface that remembers every call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Vec2, &Vec2, &LineStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, style } => Some((from, to, style)),
            _ => None,
        })
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Glyph { .. }))
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill(&mut self, color: &'static str, width: f32, height: f32) {
        self.commands.push(DrawCommand::Fill {
            color,
            width,
            height,
        });
    }

    fn draw_glyph(&mut self, glyph: &GlyphText<'_>) {
        self.commands.push(DrawCommand::Glyph {
            text: glyph.text.to_owned(),
            position: glyph.position,
            font: glyph.font(),
            color: glyph.color,
            alpha: glyph.alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            style: *style,
        });
    }
}
