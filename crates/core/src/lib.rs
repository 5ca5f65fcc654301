#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod color;
pub mod geometry;
pub mod schedule;
pub mod shape;
pub mod surface;
pub mod transform;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use color::Rgba;
pub use geometry::{ScreenRect, Viewport};
pub use schedule::{FrameClock, FrameRequestId, FrameScheduler, FrameTime};
pub use shape::{Edge, Shape};
pub use surface::DrawSurface;
pub use transform::Transform3D;

/// Monotonic frame counter (one per rendered frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct FrameTick(pub u64);

impl FrameTick {
    /// First frame of any run.
    pub const ZERO: Self = Self(0);

    /// Advance by `delta` frames.
    pub fn advance(self, delta: u64) -> Self {
        Self(self.0 + delta)
    }
}

/// Helper to derive a reproducible RNG from a base seed and a domain tag.
///
/// Each subsystem passes its own `domain` so two consumers sharing a seed
/// never draw the same sequence.
pub fn scoped_rng(seed: u64, domain: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ domain.rotate_left(32))
}
