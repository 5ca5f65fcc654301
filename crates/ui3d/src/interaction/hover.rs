//! Hover edge detection.

use glam::Vec2;
use tracing::debug;

use crate::layout::AnchorLayout;

/// A change in which anchor is under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverEvent {
    /// The pointer moved onto an anchor.
    Enter(String),
    /// The pointer left an anchor.
    Leave(String),
}

/// Remembers the hovered anchor between frames.
#[derive(Debug, Default, Clone)]
pub struct HoverTracker {
    current: Option<String>,
}

impl HoverTracker {
    /// Create a tracker with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently hovered anchor.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Record which anchor is hovered this frame and report the transitions.
    ///
    /// A change from one anchor to another yields `Leave` before `Enter`.
    pub fn update(&mut self, hovered: Option<&str>) -> Vec<HoverEvent> {
        if self.current.as_deref() == hovered {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.current.take() {
            debug!(anchor = %previous, "hover leave");
            events.push(HoverEvent::Leave(previous));
        }
        if let Some(next) = hovered {
            debug!(anchor = %next, "hover enter");
            self.current = Some(next.to_string());
            events.push(HoverEvent::Enter(next.to_string()));
        }
        events
    }

    /// Hit-test `pointer` against the hover regions of `ids` and update.
    ///
    /// The first anchor whose region contains the pointer wins.
    pub fn update_from_layout<'a, L, I>(&mut self, pointer: Option<Vec2>, layout: &L, ids: I) -> Vec<HoverEvent>
    where
        L: AnchorLayout + ?Sized,
        I: IntoIterator<Item = &'a str>,
    {
        let hovered = pointer.and_then(|point| {
            ids.into_iter().find(|id| {
                layout
                    .hover_rect(id)
                    .map(|rect| rect.contains(point))
                    .unwrap_or(false)
            })
        });
        self.update(hovered)
    }
}
