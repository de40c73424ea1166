//! Warp starfield: points rushing towards the camera, drawn as streaks.
//!
//! Stars live in a centred coordinate system (`x` in `[-w/2, w/2)`, `y` in
//! `[-h/2, h/2)`) with depth in `(0, w]`. Each frame depth shrinks by a fixed
//! step and the star is projected through a pinhole at the canvas centre.

use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::config::StarfieldConfig;
use crate::error::ConfigError;
use crate::surface::{LineStyle, Surface};
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub depth: f32,
    /// Depth at the previous projection; start of this frame's streak.
    pub previous_depth: f32,
}

/// Screen-space segment for one star this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Streak {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// Pinhole projection onto a canvas whose half-extent is `half`.
pub fn project(point: Vec2, depth: f32, half: Vec2) -> Vec2 {
    point / depth * half + half
}

/// 0 at the far plane, approaching 1 at the camera.
pub fn streak_opacity(depth: f32, width: f32) -> f32 {
    1.0 - depth / width
}

fn random_position<R: Rng>(rng: &mut R, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * viewport.width,
        (rng.gen::<f32>() - 0.5) * viewport.height,
    )
}

/// Move `star` one step closer; recycle it at the far plane once it reaches
/// the camera. Returns true when the star was recycled.
pub fn advance<R: Rng>(star: &mut Star, decay: f32, viewport: &Viewport, rng: &mut R) -> bool {
    star.depth -= decay;
    if star.depth > 0.0 {
        return false;
    }
    star.position = random_position(rng, viewport);
    star.depth = viewport.width;
    star.previous_depth = star.depth;
    true
}

/// Project `star` at its current and previous depth, then roll the previous
/// depth forward. `None` while the star is still near the far plane.
pub fn trace(star: &mut Star, viewport: &Viewport, spawn_threshold: f32) -> Option<Streak> {
    let half = Vec2::new(viewport.width, viewport.height) / 2.0;
    let to = project(star.position, star.depth, half);
    let from = project(star.position, star.previous_depth, half);
    star.previous_depth = star.depth;

    if star.depth >= viewport.width - spawn_threshold {
        return None;
    }
    Some(Streak {
        from,
        to,
        opacity: streak_opacity(star.depth, viewport.width),
    })
}

/// The contact-section starfield.
pub struct Starfield<R> {
    config: StarfieldConfig,
    viewport: Viewport,
    stars: Vec<Star>,
    rng: R,
}

impl<R: Rng> Starfield<R> {
    pub fn new(config: StarfieldConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            viewport: Viewport::new(0.0, 0.0),
            stars: Vec::new(),
            rng,
        })
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.reseed();
    }

    /// Replace the population. A zero-area canvas gets no stars, since
    /// projection divides by depth and depth is seeded from the width.
    pub fn reseed(&mut self) {
        self.stars.clear();
        if self.viewport.is_empty() {
            debug!("starfield reseeded empty: canvas has no area");
            return;
        }
        let viewport = self.viewport;
        self.stars.reserve(self.config.count);
        for _ in 0..self.config.count {
            let depth = viewport.width * (1.0 - self.rng.gen::<f32>());
            self.stars.push(Star {
                position: random_position(&mut self.rng, &viewport),
                depth,
                previous_depth: depth,
            });
        }
        debug!(
            "starfield reseeded: {} stars over {}x{}",
            self.stars.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Paint one frame. The opaque background fill always happens; stars only
    /// move and draw while `visible`.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, visible: bool) {
        let viewport = self.viewport;
        surface.fill(self.config.palette.background, viewport.width, viewport.height);
        if !visible {
            return;
        }

        for star in &mut self.stars {
            advance(star, self.config.depth_decay, &viewport, &mut self.rng);
            if let Some(streak) = trace(star, &viewport, self.config.spawn_threshold) {
                let style = LineStyle {
                    color: self.config.streak_color,
                    alpha: streak.opacity,
                    width: streak.opacity * self.config.max_streak_width,
                };
                surface.stroke_line(streak.from, streak.to, &style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_centres_on_axis() {
        let half = Vec2::new(400.0, 300.0);
        assert_eq!(project(Vec2::ZERO, 50.0, half), half);
        assert_eq!(project(Vec2::new(100.0, -100.0), 100.0, half), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn trace_rolls_previous_depth() {
        let vp = Viewport::new(800.0, 600.0);
        let mut star = Star {
            position: Vec2::new(10.0, 10.0),
            depth: 300.0,
            previous_depth: 315.0,
        };
        let streak = trace(&mut star, &vp, 100.0).unwrap();
        assert_eq!(star.previous_depth, 300.0);
        assert!((streak.opacity - 0.625).abs() < 1e-6);
        // closer projection lies further from centre
        let centre = Vec2::new(400.0, 300.0);
        assert!(streak.to.distance(centre) > streak.from.distance(centre));
    }

    #[test]
    fn trace_skips_near_far_plane() {
        let vp = Viewport::new(800.0, 600.0);
        let mut star = Star {
            position: Vec2::new(10.0, 10.0),
            depth: 700.0,
            previous_depth: 715.0,
        };
        assert!(trace(&mut star, &vp, 100.0).is_none());
        assert_eq!(star.previous_depth, 700.0);
    }

    #[test]
    fn opacity_grows_towards_camera() {
        assert!(streak_opacity(100.0, 800.0) > streak_opacity(400.0, 800.0));
        assert_eq!(streak_opacity(800.0, 800.0), 0.0);
    }
}
