//! Frame timing and frame-request scheduling.

/// Identifier returned when a frame callback is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequestId(pub u64);

/// Source of "call me on the next display refresh" requests.
///
/// The host implements this over its window redraw mechanism; tests use a
/// manual queue. Cancelling an id that already fired is a no-op.
pub trait FrameScheduler {
    /// Ask for one more frame and return its request id.
    fn request_frame(&mut self) -> FrameRequestId;

    /// Cancel a pending request.
    fn cancel_frame(&mut self, id: FrameRequestId);
}

/// Timing for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub now: f32,
    /// Seconds since the previous frame (clamped).
    pub dt: f32,
}

/// Converts raw timestamps into per-frame [`FrameTime`]s.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f32>,
    /// Upper bound for `dt` so a stalled window doesn't fling animations.
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            last: None,
            max_dt: 0.1,
        }
    }
}

impl FrameClock {
    /// Create a clock with the default `dt` cap (100 ms).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock with a custom `dt` cap.
    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            last: None,
            max_dt: max_dt.max(0.0),
        }
    }

    /// Record a frame at `now` seconds.
    ///
    /// The first frame has `dt = 0`. Timestamps that go backwards also
    /// produce `dt = 0`.
    pub fn tick(&mut self, now: f32) -> FrameTime {
        let dt = match self.last {
            Some(last) => (now - last).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last = Some(now);
        FrameTime { now, dt }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_has_zero_dt() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(3.0), FrameTime { now: 3.0, dt: 0.0 });
        let t = clock.tick(3.016);
        assert!((t.dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn dt_is_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        assert_eq!(clock.tick(5.0).dt, 0.1);
        assert_eq!(clock.tick(4.0).dt, 0.0);
    }
}
