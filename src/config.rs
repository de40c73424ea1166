//! Tunables for both canvas effects.
//!
//! Defaults mirror the production landing page. Every engine takes its config
//! by value at construction, so tests can shrink or exaggerate any constant.

use std::ops::Range;

use crate::error::ConfigError;

/// DOM id of the canvas behind the hero section.
pub const GLYPH_CANVAS_ID: &str = "hero-canvas";
/// DOM id of the canvas behind the contact section.
pub const STARFIELD_CANVAS_ID: &str = "contact-canvas";

/// CSS colour strings shared by both effects.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub accent: &'static str,
    pub accent_dark: &'static str,
    pub white: &'static str,
    pub background: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: "#ccff00",
            accent_dark: "#aacc00",
            white: "#ffffff",
            background: "#0a0a0a",
        }
    }
}

/// Syntax class of a glyph token; decides its colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Keyword,
    Operator,
    Structure,
    Type,
}

impl TokenCategory {
    pub fn color(self, palette: &Palette) -> &'static str {
        match self {
            TokenCategory::Keyword => palette.accent,
            TokenCategory::Type => palette.accent_dark,
            TokenCategory::Operator | TokenCategory::Structure => palette.white,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphToken {
    pub text: &'static str,
    pub category: TokenCategory,
}

const fn token(text: &'static str, category: TokenCategory) -> GlyphToken {
    GlyphToken { text, category }
}

pub const SYNTAX_TOKENS: [GlyphToken; 19] = [
    token("const", TokenCategory::Keyword),
    token("let", TokenCategory::Keyword),
    token("=>", TokenCategory::Operator),
    token("{}", TokenCategory::Structure),
    token("[]", TokenCategory::Structure),
    token("()", TokenCategory::Structure),
    token("import", TokenCategory::Keyword),
    token("export", TokenCategory::Keyword),
    token("interface", TokenCategory::Keyword),
    token("type", TokenCategory::Keyword),
    token("any", TokenCategory::Type),
    token("void", TokenCategory::Type),
    token("===", TokenCategory::Operator),
    token("?:", TokenCategory::Operator),
    token("as", TokenCategory::Keyword),
    token("...", TokenCategory::Operator),
    token("async", TokenCategory::Keyword),
    token("await", TokenCategory::Keyword),
    token("<T>", TokenCategory::Type),
];

/// Glyph field ("code constellation") parameters.
#[derive(Clone, Debug)]
pub struct GlyphFieldConfig {
    /// Viewport area (CSS px²) per particle. Larger means sparser.
    pub density_divisor: f32,
    /// Particles closer than this are linked by a line.
    pub connection_distance: f32,
    /// Pointer influence radius.
    pub repel_radius: f32,
    /// Peak displacement per frame is `2 * repel_strength`.
    pub repel_strength: f32,
    pub size: Range<f32>,
    pub base_opacity: Range<f32>,
    pub velocity: Range<f32>,
    pub pulse_amplitude: f32,
    pub pulse_speed: Range<f32>,
    pub pulse_phase: Range<f32>,
    pub link_alpha: f32,
    pub link_width: f32,
    pub font_family: &'static str,
    pub tokens: Vec<GlyphToken>,
    pub palette: Palette,
}

impl Default for GlyphFieldConfig {
    fn default() -> Self {
        Self {
            density_divisor: 15_000.0,
            connection_distance: 120.0,
            repel_radius: 200.0,
            repel_strength: 1.0,
            size: 10.0..12.0,
            base_opacity: 0.1..0.6,
            velocity: -0.5..0.5,
            pulse_amplitude: 0.1,
            pulse_speed: 0.01..0.06,
            pulse_phase: 0.0..std::f32::consts::PI,
            link_alpha: 0.15,
            link_width: 0.5,
            font_family: "\"Courier New\", monospace",
            tokens: SYNTAX_TOKENS.to_vec(),
            palette: Palette::default(),
        }
    }
}

impl GlyphFieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("density_divisor", self.density_divisor)?;
        positive("connection_distance", self.connection_distance)?;
        positive("repel_radius", self.repel_radius)?;
        ordered("size", &self.size)?;
        ordered("base_opacity", &self.base_opacity)?;
        ordered("velocity", &self.velocity)?;
        ordered("pulse_speed", &self.pulse_speed)?;
        ordered("pulse_phase", &self.pulse_phase)?;
        if self.tokens.is_empty() {
            return Err(ConfigError::EmptyTokenTable);
        }
        Ok(())
    }
}

/// Warp starfield parameters.
#[derive(Clone, Debug)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Depth removed from every star each frame.
    pub depth_decay: f32,
    /// Stars deeper than `width - spawn_threshold` are not drawn.
    pub spawn_threshold: f32,
    pub max_streak_width: f32,
    pub streak_color: &'static str,
    pub palette: Palette,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            count: 400,
            depth_decay: 15.0,
            spawn_threshold: 100.0,
            max_streak_width: 2.0,
            streak_color: palette.white,
            palette,
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("depth_decay", self.depth_decay)?;
        if self.spawn_threshold < 0.0 {
            return Err(ConfigError::NotPositive {
                field: "spawn_threshold",
                value: self.spawn_threshold,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn ordered(field: &'static str, range: &Range<f32>) -> Result<(), ConfigError> {
    if range.start < range.end {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange {
            field,
            start: range.start,
            end: range.end,
        })
    }
}
