//! The particle field itself.

use glam::Vec2;
use holoexpo_core::{scoped_rng, DrawSurface, Viewport};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::particle::wrap_x;
use crate::{Particle, ParticleConfig, PARTICLE_RNG_DOMAIN};

/// Number of particles for a viewport: `min(max_count, floor(area / area_per_particle))`.
pub fn target_count(viewport: Viewport, config: &ParticleConfig) -> usize {
    if viewport.is_empty() || !(config.area_per_particle > 0.0) {
        return 0;
    }
    let by_area = (viewport.area() / config.area_per_particle).floor();
    (by_area as usize).min(config.max_count)
}

/// What a single tick drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldStats {
    /// Particles drawn.
    pub particles: usize,
    /// Connection lines drawn.
    pub connections: usize,
    /// Particles respawned at the bottom this tick.
    pub respawned: usize,
    /// Particles displaced by the pointer this tick.
    pub repelled: usize,
}

/// Owns the particle set and the viewport it lives in.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Create an empty field; call [`ParticleField::init`] to populate it.
    pub fn new(config: ParticleConfig) -> Self {
        let rng = scoped_rng(config.seed, PARTICLE_RNG_DOMAIN);
        Self {
            config,
            viewport: Viewport::default(),
            particles: Vec::new(),
            rng,
        }
    }

    /// Size the field to `viewport` and seed a fresh particle set.
    pub fn init(&mut self, viewport: Viewport) {
        self.populate(viewport);
        info!(
            width = viewport.width,
            height = viewport.height,
            count = self.particles.len(),
            "particle field initialized"
        );
    }

    /// Recreate the whole set for a new viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.populate(viewport);
        info!(
            width = viewport.width,
            height = viewport.height,
            count = self.particles.len(),
            "particle field resized"
        );
    }

    fn populate(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.particles.clear();
        let count = target_count(viewport, &self.config);
        let rng = &mut self.rng;
        let config = &self.config;
        self.particles
            .extend((0..count).map(|_| Particle::spawn(rng, viewport, config)));
    }

    /// Advance every particle once.
    pub fn step(&mut self, pointer: Option<Vec2>) -> FieldStats {
        let mut stats = FieldStats {
            particles: self.particles.len(),
            ..Default::default()
        };
        let viewport = self.viewport;
        for particle in &mut self.particles {
            particle.position += particle.velocity;
            particle.twinkle(&self.config);

            if let Some(pointer) = pointer {
                if particle.repel(pointer, &self.config) {
                    stats.repelled += 1;
                }
            }

            if particle.position.y < -self.config.respawn_margin {
                particle.reset(&mut self.rng, viewport, &self.config, true);
                stats.respawned += 1;
            }

            particle.position.x = wrap_x(particle.position.x, viewport.width);
        }
        if stats.respawned > 0 {
            debug!(respawned = stats.respawned, "particles respawned");
        }
        stats
    }

    /// Clear `surface` and draw the particles followed by their connections.
    ///
    /// Returns the number of connection lines drawn.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> usize {
        surface.clear(self.viewport.width, self.viewport.height);
        let base = self.config.rgba();
        for particle in &self.particles {
            surface.fill_square(particle.position, particle.size, base.with_alpha(particle.opacity));
        }

        let max_dist = self.config.connection_dist;
        if !(max_dist > 0.0) {
            return 0;
        }
        let mut connections = 0;
        for (a, first) in self.particles.iter().enumerate() {
            for second in &self.particles[a + 1..] {
                let distance = first.position.distance(second.position);
                if distance < max_dist {
                    let alpha = (1.0 - distance / max_dist) * self.config.line_opacity;
                    surface.stroke_line(
                        first.position,
                        second.position,
                        self.config.line_width,
                        base.with_alpha(alpha),
                    );
                    connections += 1;
                }
            }
        }
        connections
    }

    /// Step and draw in one go.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, pointer: Option<Vec2>, surface: &mut S) -> FieldStats {
        let mut stats = self.step(pointer);
        stats.connections = self.draw(surface);
        stats
    }

    /// Current particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field has no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Viewport the field is sized to.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Active configuration.
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }
}
