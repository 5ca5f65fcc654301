#![warn(missing_docs)]
//! Decorative particle background.
//!
//! A [`ParticleField`] owns a set of slowly rising, twinkling points sized
//! to the viewport. Each tick advances them, pushes them away from the
//! pointer, and draws them (plus faint proximity lines) onto a
//! [`holoexpo_core::DrawSurface`]. [`FieldLoop`] keeps the field ticking on
//! its own frame requests until stopped.

mod config;
mod field;
mod field_loop;
mod particle;

pub use config::{ParticleConfig, ParticleConfigError};
pub use field::{target_count, FieldStats, ParticleField};
pub use field_loop::FieldLoop;
pub use particle::Particle;

/// RNG domain tag for particle sampling.
pub const PARTICLE_RNG_DOMAIN: u64 = 0x5041_5254;
