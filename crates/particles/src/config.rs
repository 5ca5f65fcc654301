//! Particle field tuning.

use holoexpo_core::Rgba;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A particle setting outside its usable range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParticleConfigError {
    /// `area_per_particle` was zero, negative or NaN.
    #[error("area_per_particle must be positive, got {0}")]
    NonPositiveArea(f32),
    /// A distance, size, or rate was negative or NaN.
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// The opacity band leaves [0, 1].
    #[error("opacity band [{low}, {high}] must lie within [0, 1]")]
    OpacityBand {
        /// Lower bound.
        low: f32,
        /// Upper bound.
        high: f32,
    },
}

/// Tuning knobs for the particle field.
///
/// Every field has a default so partial TOML tables deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Hard cap on the particle count.
    pub max_count: usize,
    /// Screen area (px²) per particle.
    pub area_per_particle: f32,
    /// Particle and line color as `[r, g, b]`.
    pub color: [u8; 3],
    /// Lowest opacity a particle fades to.
    pub base_opacity: f32,
    /// Opacity range above `base_opacity`.
    pub range_opacity: f32,
    /// Velocity spread in px per tick.
    pub speed: f32,
    /// Minimum upward drift added to every particle's vertical speed.
    pub min_rise: f32,
    /// Smallest particle size in px.
    pub size_base: f32,
    /// Random size added on top of `size_base`.
    pub size_range: f32,
    /// Slowest opacity change per tick.
    pub fade_base: f32,
    /// Random fade rate added on top of `fade_base`.
    pub fade_range: f32,
    /// Pairs closer than this are connected by a line.
    pub connection_dist: f32,
    /// Pointer repulsion radius.
    pub mouse_dist: f32,
    /// Opacity of a connection line at zero distance.
    pub line_opacity: f32,
    /// Connection line width.
    pub line_width: f32,
    /// How far above the top edge a particle may drift before respawning,
    /// and the depth of the band below the bottom edge it respawns into.
    pub respawn_margin: f32,
    /// Multiplier on the repulsion displacement.
    pub push_strength: f32,
    /// Seed for particle sampling.
    pub seed: u64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_count: 100,
            area_per_particle: 15_000.0,
            color: [0, 243, 255],
            base_opacity: 0.4,
            range_opacity: 0.3,
            speed: 0.2,
            min_rise: 0.1,
            size_base: 1.0,
            size_range: 1.5,
            fade_base: 0.001,
            fade_range: 0.002,
            connection_dist: 100.0,
            mouse_dist: 150.0,
            line_opacity: 0.15,
            line_width: 0.5,
            respawn_margin: 10.0,
            push_strength: 1.0,
            seed: 0x00f3_ff00,
        }
    }
}

impl ParticleConfig {
    /// Base color with full alpha.
    pub fn rgba(&self) -> Rgba {
        let [r, g, b] = self.color;
        Rgba::rgb(r, g, b)
    }

    /// Highest opacity a particle reaches.
    pub fn max_opacity(&self) -> f32 {
        self.base_opacity + self.range_opacity
    }

    /// Check that the values describe a usable field.
    pub fn validate(&self) -> Result<(), ParticleConfigError> {
        if !(self.area_per_particle > 0.0) {
            return Err(ParticleConfigError::NonPositiveArea(self.area_per_particle));
        }
        let non_negative = [
            ("range_opacity", self.range_opacity),
            ("speed", self.speed),
            ("size_base", self.size_base),
            ("size_range", self.size_range),
            ("fade_base", self.fade_base),
            ("fade_range", self.fade_range),
            ("connection_dist", self.connection_dist),
            ("mouse_dist", self.mouse_dist),
            ("line_width", self.line_width),
            ("respawn_margin", self.respawn_margin),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ParticleConfigError::Negative { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.base_opacity) || self.max_opacity() > 1.0 {
            return Err(ParticleConfigError::OpacityBand {
                low: self.base_opacity,
                high: self.max_opacity(),
            });
        }
        Ok(())
    }
}
