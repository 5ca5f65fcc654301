#![warn(missing_docs)]
//! Time-boxed eased transitions.
//!
//! A [`Tween`] is a plain record (`from`, `to`, start time, duration,
//! easing); sampling it at a time gives the interpolated value. An
//! [`Animator`] owns at most one tween per property key and replaces it on
//! every retarget, so transitions never stack.

mod animator;
mod easing;

pub use animator::Animator;
pub use easing::Easing;

/// A single eased transition of one scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Value at the start time.
    pub from: f32,
    /// Value once the duration has elapsed.
    pub to: f32,
    /// Start time in seconds.
    pub start: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing curve applied to the normalized progress.
    pub easing: Easing,
}

impl Tween {
    /// Create a tween starting at `start`.
    pub fn new(from: f32, to: f32, start: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Normalized progress in [0, 1] at time `now`.
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value at time `now`.
    pub fn value_at(&self, now: f32) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Whether the tween has reached its end value at `now`.
    pub fn is_finished(&self, now: f32) -> bool {
        self.progress(now) >= 1.0
    }
}
