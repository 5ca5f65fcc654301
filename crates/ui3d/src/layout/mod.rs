//! Live anchor rectangles.
//!
//! The page layout owns where anchors sit on screen. Icons ask for the
//! placement rectangle of the anchor they follow; hover hit-testing asks
//! for the anchor's hover region, which may be the whole card around it.

use holoexpo_core::ScreenRect;
use std::collections::HashMap;

/// Source of on-screen anchor rectangles.
pub trait AnchorLayout {
    /// Current placement rectangle of anchor `id`, if it is laid out this frame.
    fn anchor_rect(&self, id: &str) -> Option<ScreenRect>;

    /// Region that counts as hovering anchor `id`.
    ///
    /// Defaults to the placement rectangle.
    fn hover_rect(&self, id: &str) -> Option<ScreenRect> {
        self.anchor_rect(id)
    }
}

/// Anchor rectangles collected once per frame, or fixed for headless runs.
#[derive(Debug, Default, Clone)]
pub struct StaticLayout {
    rects: HashMap<String, ScreenRect>,
    hover: HashMap<String, ScreenRect>,
}

impl StaticLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) an anchor's placement rectangle.
    pub fn insert(&mut self, id: impl Into<String>, rect: ScreenRect) {
        self.rects.insert(id.into(), rect);
    }

    /// Set (or replace) an anchor's hover region.
    pub fn insert_hover(&mut self, id: impl Into<String>, rect: ScreenRect) {
        self.hover.insert(id.into(), rect);
    }

    /// Remove an anchor and its hover region.
    pub fn remove(&mut self, id: &str) -> Option<ScreenRect> {
        self.hover.remove(id);
        self.rects.remove(id)
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether there are no anchors.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl AnchorLayout for StaticLayout {
    fn anchor_rect(&self, id: &str) -> Option<ScreenRect> {
        self.rects.get(id).copied()
    }

    fn hover_rect(&self, id: &str) -> Option<ScreenRect> {
        self.hover.get(id).copied().or_else(|| self.anchor_rect(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_layout_lookup() {
        let mut layout = StaticLayout::new();
        layout.insert("cube", ScreenRect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(layout.anchor_rect("cube"), Some(ScreenRect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(layout.anchor_rect("torus"), None);
        assert!(layout.remove("cube").is_some());
        assert!(layout.is_empty());
    }

    #[test]
    fn hover_region_falls_back_to_placement() {
        let mut layout = StaticLayout::new();
        layout.insert("cube", ScreenRect::new(10.0, 10.0, 20.0, 20.0));
        assert_eq!(layout.hover_rect("cube"), layout.anchor_rect("cube"));

        layout.insert_hover("cube", ScreenRect::new(0.0, 0.0, 40.0, 80.0));
        assert_eq!(layout.hover_rect("cube"), Some(ScreenRect::new(0.0, 0.0, 40.0, 80.0)));
        assert_eq!(layout.anchor_rect("cube"), Some(ScreenRect::new(10.0, 10.0, 20.0, 20.0)));

        layout.remove("cube");
        assert_eq!(layout.hover_rect("cube"), None);
    }
}
