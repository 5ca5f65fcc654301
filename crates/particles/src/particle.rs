//! A single background particle.

use glam::Vec2;
use holoexpo_core::Viewport;
use rand::Rng;

use crate::ParticleConfig;

/// One drifting, twinkling point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Top-left corner in logical pixels.
    pub position: Vec2,
    /// Displacement per tick.
    pub velocity: Vec2,
    /// Side length of the drawn square.
    pub size: f32,
    /// Current opacity.
    pub opacity: f32,
    /// Opacity change per tick (always positive).
    pub fade: f32,
    /// +1.0 while brightening, -1.0 while dimming.
    pub fade_direction: f32,
}

/// Uniform sample in `[0, span)`; a non-positive span yields 0.
fn unit_span<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    if span > 0.0 {
        rng.gen::<f32>() * span
    } else {
        0.0
    }
}

impl Particle {
    /// Sample a particle anywhere inside the viewport.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, config: &ParticleConfig) -> Self {
        let mut particle = Self::blank();
        particle.reset(rng, viewport, config, false);
        particle
    }

    fn blank() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 0.0,
            opacity: 0.0,
            fade: 0.0,
            fade_direction: 1.0,
        }
    }

    /// Re-sample every attribute.
    ///
    /// With `from_bottom` the particle is placed in the band just below the
    /// bottom edge instead of anywhere on screen.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: Viewport,
        config: &ParticleConfig,
        from_bottom: bool,
    ) {
        let x = unit_span(rng, viewport.width);
        let y = if from_bottom {
            viewport.height + unit_span(rng, config.respawn_margin)
        } else {
            unit_span(rng, viewport.height)
        };
        self.position = Vec2::new(x, y);
        self.velocity = Vec2::new(
            unit_span(rng, config.speed) - config.speed * 0.5,
            -(unit_span(rng, config.speed) + config.min_rise),
        );
        self.size = unit_span(rng, config.size_range) + config.size_base;
        self.opacity = unit_span(rng, config.range_opacity) + config.base_opacity;
        self.fade = unit_span(rng, config.fade_range) + config.fade_base;
        self.fade_direction = 1.0;
    }

    /// Step the opacity oscillation, bouncing off the band edges.
    pub fn twinkle(&mut self, config: &ParticleConfig) {
        let low = config.base_opacity;
        let high = config.max_opacity();
        self.opacity += self.fade * self.fade_direction;
        if self.opacity > high {
            self.opacity = high;
            self.fade_direction = -1.0;
        } else if self.opacity < low {
            self.opacity = low;
            self.fade_direction = 1.0;
        }
    }

    /// Push the particle away from `pointer` when inside `mouse_dist`.
    ///
    /// Returns whether the particle was displaced.
    pub fn repel(&mut self, pointer: Vec2, config: &ParticleConfig) -> bool {
        let delta = pointer - self.position;
        let distance = delta.length();
        if !(distance < config.mouse_dist) {
            return false;
        }
        let force = (config.mouse_dist - distance) / config.mouse_dist;
        let direction = if distance > f32::EPSILON {
            delta / distance
        } else {
            // Coincident with the pointer: escape upwards.
            Vec2::Y
        };
        self.position -= direction * force * config.push_strength;
        true
    }
}

/// Wrap `x` into `[0, width)`; an empty width collapses to 0.
pub(crate) fn wrap_x(x: f32, width: f32) -> f32 {
    if !(width > 0.0) || !x.is_finite() {
        return 0.0;
    }
    let wrapped = x.rem_euclid(width);
    if wrapped >= width {
        0.0
    } else {
        wrapped
    }
}
