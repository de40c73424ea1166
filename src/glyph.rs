//! Glyph field: drifting syntax tokens that pulse, link to their neighbours
//! and shy away from the pointer.

use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::config::{GlyphFieldConfig, GlyphToken};
use crate::error::ConfigError;
use crate::pointer::PointerState;
use crate::surface::{GlyphText, LineStyle, Surface};
use crate::viewport::Viewport;

#[derive(Clone, Debug, PartialEq)]
pub struct GlyphParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub token: GlyphToken,
    pub color: &'static str,
    pub base_opacity: f32,
    pub pulse_phase: f32,
    pub pulse_speed: f32,
    /// Opacity used for the next draw, always within `[0, 1]`.
    pub render_opacity: f32,
}

impl GlyphParticle {
    /// Point where links attach, roughly the visual centre of the text.
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y - self.size / 3.0)
    }
}

/// Population size for a viewport: `floor(width * height / divisor)`.
pub fn particle_count(viewport: &Viewport, density_divisor: f32) -> usize {
    if density_divisor <= 0.0 {
        return 0;
    }
    (viewport.area() / density_divisor).floor() as usize
}

/// Wrap a coordinate onto `[0, extent)`.
pub fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

fn wrap_point(p: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(wrap(p.x, bounds.x), wrap(p.y, bounds.y))
}

/// Displacement applied to a particle at `position` by a pointer at `pointer`.
///
/// Points away from the pointer with magnitude `2 * strength * (radius - d) / radius`;
/// `None` outside the radius. A pointer exactly on the particle pushes towards -x.
pub fn repulsion(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Option<Vec2> {
    let delta = pointer - position;
    let distance = delta.length();
    if distance >= radius {
        return None;
    }
    let falloff = (radius - distance) / radius;
    let angle = delta.y.atan2(delta.x);
    Some(-Vec2::from_angle(angle) * falloff * strength * 2.0)
}

/// Alpha of a link between two particles `distance` apart, zero at and beyond
/// `connection_distance`.
pub fn link_alpha(distance: f32, connection_distance: f32, peak: f32) -> f32 {
    if distance >= connection_distance {
        return 0.0;
    }
    (1.0 - distance / connection_distance) * peak
}

/// Advance one particle by `dt` frames.
pub fn update_particle(
    particle: &mut GlyphParticle,
    bounds: Vec2,
    pointer: &PointerState,
    config: &GlyphFieldConfig,
    dt: f32,
) {
    particle.position = wrap_point(particle.position + particle.velocity * dt, bounds);

    particle.pulse_phase += particle.pulse_speed * dt;
    let mut opacity = particle.base_opacity + particle.pulse_phase.sin() * config.pulse_amplitude;

    if let Some(push) = repulsion(
        particle.position,
        pointer.position,
        config.repel_radius,
        config.repel_strength,
    ) {
        particle.position = wrap_point(particle.position + push * dt, bounds);
        // hover highlight replaces the pulse outright
        opacity = 1.0;
    }

    particle.render_opacity = opacity.clamp(0.0, 1.0);
}

/// The hero-section particle system.
pub struct GlyphField<R> {
    config: GlyphFieldConfig,
    viewport: Viewport,
    particles: Vec<GlyphParticle>,
    rng: R,
}

impl<R: Rng> GlyphField<R> {
    /// Creates an empty field; call [`GlyphField::resize`] to populate it.
    pub fn new(config: GlyphFieldConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            viewport: Viewport::new(0.0, 0.0),
            particles: Vec::new(),
            rng,
        })
    }

    pub fn config(&self) -> &GlyphFieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[GlyphParticle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [GlyphParticle] {
        &mut self.particles
    }

    /// Adopt a new viewport and respawn the whole population.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.reseed();
    }

    pub fn reseed(&mut self) {
        let count = particle_count(&self.viewport, self.config.density_divisor);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.spawn();
            self.particles.push(particle);
        }
        debug!(
            "glyph field reseeded: {} particles over {}x{}",
            count, self.viewport.width, self.viewport.height
        );
    }

    fn spawn(&mut self) -> GlyphParticle {
        let cfg = &self.config;
        let rng = &mut self.rng;
        let width = self.viewport.width.max(0.0);
        let height = self.viewport.height.max(0.0);

        let token = cfg.tokens[rng.gen_range(0..cfg.tokens.len())];
        let base_opacity = rng.gen_range(cfg.base_opacity.clone());
        GlyphParticle {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                rng.gen_range(cfg.velocity.clone()),
                rng.gen_range(cfg.velocity.clone()),
            ),
            size: rng.gen_range(cfg.size.clone()),
            token,
            color: token.category.color(&cfg.palette),
            base_opacity,
            pulse_phase: rng.gen_range(cfg.pulse_phase.clone()),
            pulse_speed: rng.gen_range(cfg.pulse_speed.clone()),
            render_opacity: base_opacity,
        }
    }

    /// Advance every particle by `dt` frames against the current pointer.
    pub fn step(&mut self, pointer: &PointerState, dt: f32) {
        let bounds = Vec2::new(self.viewport.width, self.viewport.height);
        for particle in &mut self.particles {
            update_particle(particle, bounds, pointer, &self.config, dt);
        }
    }

    /// Clear the surface, then draw each particle followed by its links to
    /// every later particle, so each pair is stroked once.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let cfg = &self.config;
        surface.clear(self.viewport.width, self.viewport.height);

        for (i, p) in self.particles.iter().enumerate() {
            surface.draw_glyph(&GlyphText {
                text: p.token.text,
                position: p.position,
                size: p.size,
                font_family: cfg.font_family,
                color: p.color,
                alpha: p.render_opacity,
            });

            for q in &self.particles[i + 1..] {
                let distance = p.position.distance(q.position);
                if distance < cfg.connection_distance {
                    let style = LineStyle {
                        color: cfg.palette.accent,
                        alpha: link_alpha(distance, cfg.connection_distance, cfg.link_alpha),
                        width: cfg.link_width,
                    };
                    surface.stroke_line(p.anchor(), q.anchor(), &style);
                }
            }
        }
    }

    /// One full frame at unit timestep.
    pub fn frame<S: Surface + ?Sized>(&mut self, pointer: &PointerState, surface: &mut S) {
        self.step(pointer, 1.0);
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_is_euclidean() {
        assert_eq!(wrap(105.0, 100.0), 5.0);
        assert_eq!(wrap(-5.0, 100.0), 95.0);
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert_eq!(wrap(42.0, 0.0), 0.0);
        assert!(wrap(-1e-9, 100.0) < 100.0);
    }

    #[test]
    fn repulsion_outside_radius_is_none() {
        assert!(repulsion(Vec2::ZERO, Vec2::new(200.0, 0.0), 200.0, 1.0).is_none());
        assert!(repulsion(Vec2::ZERO, Vec2::new(300.0, 0.0), 200.0, 1.0).is_none());
    }

    #[test]
    fn repulsion_points_away_from_pointer() {
        let push = repulsion(Vec2::new(100.0, 100.0), Vec2::new(150.0, 100.0), 200.0, 1.0).unwrap();
        assert!(push.x < 0.0);
        assert!(push.y.abs() < 1e-5);
        assert!((push.length() - 2.0 * 150.0 / 200.0).abs() < 1e-5);
    }

    #[test]
    fn coincident_pointer_pushes_left() {
        let push = repulsion(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), 200.0, 1.5).unwrap();
        assert_eq!(push, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn link_alpha_bounds() {
        assert_eq!(link_alpha(0.0, 120.0, 0.15), 0.15);
        assert_eq!(link_alpha(120.0, 120.0, 0.15), 0.0);
        assert_eq!(link_alpha(500.0, 120.0, 0.15), 0.0);
        assert!((link_alpha(60.0, 120.0, 0.15) - 0.075).abs() < 1e-6);
    }

    #[test]
    fn count_floors() {
        assert_eq!(particle_count(&Viewport::new(1500.0, 1000.0), 15_000.0), 100);
        assert_eq!(particle_count(&Viewport::new(100.0, 100.0), 15_000.0), 0);
        assert_eq!(particle_count(&Viewport::new(0.0, 1000.0), 15_000.0), 0);
    }
}
