//! Start/stop handle for the self-rescheduling field loop.

use glam::Vec2;
use holoexpo_core::{DrawSurface, FrameRequestId, FrameScheduler};
use tracing::debug;

use crate::{FieldStats, ParticleField};

/// Keeps a [`ParticleField`] ticking once per frame until stopped.
///
/// Each handled frame requests the next one and remembers its id, so
/// [`FieldLoop::stop`] can cancel the outstanding request and no tick runs
/// afterwards.
#[derive(Debug, Default)]
pub struct FieldLoop {
    pending: Option<FrameRequestId>,
    running: bool,
}

impl FieldLoop {
    /// Create a stopped loop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin ticking. Starting a running loop does nothing.
    pub fn start<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending = Some(scheduler.request_frame());
        debug!(request = ?self.pending, "particle loop started");
    }

    /// Handle a fired frame request.
    ///
    /// Ticks the field only if `id` is the request this loop is waiting
    /// for, then schedules the next frame.
    pub fn on_frame<F, S>(
        &mut self,
        id: FrameRequestId,
        field: &mut ParticleField,
        pointer: Option<Vec2>,
        surface: &mut S,
        scheduler: &mut F,
    ) -> Option<FieldStats>
    where
        F: FrameScheduler + ?Sized,
        S: DrawSurface + ?Sized,
    {
        if !self.running || self.pending != Some(id) {
            return None;
        }
        let stats = field.tick(pointer, surface);
        self.pending = Some(scheduler.request_frame());
        Some(stats)
    }

    /// Stop ticking and cancel the outstanding frame request.
    pub fn stop<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        self.running = false;
        if let Some(id) = self.pending.take() {
            scheduler.cancel_frame(id);
            debug!(request = id.0, "particle loop stopped");
        }
    }

    /// Whether the loop is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The frame request the loop is waiting on.
    pub fn pending(&self) -> Option<FrameRequestId> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParticleConfig;
    use holoexpo_core::Viewport;
    use holoexpo_testkit::{ManualScheduler, RecordingSurface};

    fn setup() -> (FieldLoop, ParticleField, ManualScheduler, RecordingSurface) {
        let mut field = ParticleField::new(ParticleConfig::default());
        field.init(Viewport::new(600.0, 500.0));
        (
            FieldLoop::new(),
            field,
            ManualScheduler::new(),
            RecordingSurface::new(),
        )
    }

    #[test]
    fn loop_reschedules_every_frame() {
        let (mut frame_loop, mut field, mut scheduler, mut surface) = setup();
        frame_loop.start(&mut scheduler);
        for _ in 0..3 {
            let due = scheduler.fire();
            assert_eq!(due.len(), 1);
            let stats = frame_loop.on_frame(due[0], &mut field, None, &mut surface, &mut scheduler);
            assert_eq!(stats.map(|s| s.particles), Some(20));
        }
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn stop_cancels_pending_request() {
        let (mut frame_loop, mut field, mut scheduler, mut surface) = setup();
        frame_loop.start(&mut scheduler);
        let due = scheduler.fire();
        frame_loop.on_frame(due[0], &mut field, None, &mut surface, &mut scheduler);

        frame_loop.stop(&mut scheduler);
        assert!(!frame_loop.is_running());
        assert_eq!(scheduler.pending_count(), 0);
        assert!(scheduler.fire().is_empty());
    }

    #[test]
    fn stale_request_does_not_tick() {
        let (mut frame_loop, mut field, mut scheduler, mut surface) = setup();
        frame_loop.start(&mut scheduler);
        let due = scheduler.fire();
        frame_loop.stop(&mut scheduler);
        surface.reset();
        let stats = frame_loop.on_frame(due[0], &mut field, None, &mut surface, &mut scheduler);
        assert!(stats.is_none());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn start_twice_requests_once() {
        let (mut frame_loop, _, mut scheduler, _) = setup();
        frame_loop.start(&mut scheduler);
        frame_loop.start(&mut scheduler);
        assert_eq!(scheduler.pending_count(), 1);
    }
}
