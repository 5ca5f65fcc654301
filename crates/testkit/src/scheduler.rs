//! Frame scheduler driven by hand.

use holoexpo_core::{FrameRequestId, FrameScheduler};

/// Queues frame requests until [`ManualScheduler::fire`] is called.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameRequestId>,
    cancelled: usize,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending request, in request order.
    pub fn fire(&mut self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.pending)
    }

    /// Requests waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Requests cancelled before firing.
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequestId {
        self.next_id += 1;
        let id = FrameRequestId(self.next_id);
        self.pending.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != id);
        self.cancelled += before - self.pending.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_fire_in_order() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.request_frame();
        let b = scheduler.request_frame();
        assert_ne!(a, b);
        assert_eq!(scheduler.fire(), vec![a, b]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn cancel_removes_only_pending() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.request_frame();
        scheduler.cancel_frame(a);
        scheduler.cancel_frame(a);
        assert_eq!(scheduler.cancelled_count(), 1);
        assert!(scheduler.fire().is_empty());
    }
}
