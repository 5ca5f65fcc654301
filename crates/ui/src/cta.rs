//! Floating mobile call-to-action.

use holoexpo_core::{ScreenRect, Viewport};

/// Intersection ratio at which an in-page button counts as visible.
pub const CTA_VISIBILITY_THRESHOLD: f32 = 0.1;

/// Shows the floating CTA only while no in-page book button is on screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileCta {
    visible: bool,
}

impl MobileCta {
    /// Create a hidden CTA.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute visibility from the book buttons' rectangles.
    pub fn update<'a, I>(&mut self, buttons: I, viewport: Viewport) -> bool
    where
        I: IntoIterator<Item = &'a ScreenRect>,
    {
        let any_visible = buttons
            .into_iter()
            .any(|rect| rect.visible_fraction(viewport) >= CTA_VISIBILITY_THRESHOLD);
        self.visible = !any_visible;
        self.visible
    }

    /// Whether the floating CTA is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
