#![warn(missing_docs)]
//! Pointer and viewport input for the landing page.
//!
//! One writer (the window event handler) updates a [`PointerState`]; every
//! per-frame consumer receives it by shared reference.

use glam::Vec2;
use holoexpo_core::Viewport;
use winit::event::WindowEvent;

/// Pointer and viewport state tracked across frames.
#[derive(Debug, Clone)]
pub struct PointerState {
    /// Pointer position in logical pixels while it is over the window.
    position: Option<Vec2>,
    /// Last position seen, kept after the pointer leaves.
    last_seen: Option<Vec2>,
    /// Current viewport in logical pixels.
    viewport: Viewport,
    /// Window scale factor (physical / logical).
    scale_factor: f64,
    /// Whether the viewport changed this frame (edge-triggered).
    resized: bool,
    /// Whether the pointer moved this frame (edge-triggered).
    moved: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl PointerState {
    /// Create pointer state for a viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: None,
            last_seen: None,
            viewport,
            scale_factor: 1.0,
            resized: false,
            moved: false,
        }
    }

    /// Process a window event to update pointer state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                self.move_to(Vec2::new(logical.x, logical.y));
            }
            WindowEvent::CursorLeft { .. } => self.leave(),
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f32>(self.scale_factor);
                self.resize(Viewport::new(logical.width, logical.height));
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
            }
            _ => {}
        }
    }

    /// Record a pointer move (logical pixels).
    pub fn move_to(&mut self, position: Vec2) {
        self.position = Some(position);
        self.last_seen = Some(position);
        self.moved = true;
    }

    /// Record the pointer leaving the window.
    ///
    /// Hover and repulsion stop; [`PointerState::normalized`] keeps the last
    /// position so the arm stays where it was looking.
    pub fn leave(&mut self) {
        if self.position.take().is_some() {
            self.moved = true;
        }
    }

    /// Record a viewport resize (logical pixels).
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "viewport resized"
            );
            self.viewport = viewport;
            self.resized = true;
        }
    }

    /// Update the scale factor used to convert physical event coordinates.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Reset per-frame state (call at the start of each frame).
    pub fn begin_frame(&mut self) {
        self.resized = false;
        self.moved = false;
    }

    /// Pointer position, if it is over the window.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the viewport changed since the last [`PointerState::begin_frame`].
    pub fn resized(&self) -> bool {
        self.resized
    }

    /// Whether the pointer moved since the last [`PointerState::begin_frame`].
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Pointer position in [-1, 1] on both axes, y up.
    ///
    /// Before the first move this is the origin; after the pointer leaves
    /// it is the last position seen.
    pub fn normalized(&self) -> Vec2 {
        match self.last_seen {
            Some(position) => self.viewport.to_ndc(position),
            None => Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_starts_unknown() {
        let pointer = PointerState::new(Viewport::new(800.0, 600.0));
        assert_eq!(pointer.position(), None);
        assert_eq!(pointer.normalized(), Vec2::ZERO);
    }

    #[test]
    fn normalized_corners() {
        let mut pointer = PointerState::new(Viewport::new(800.0, 600.0));
        pointer.move_to(Vec2::new(0.0, 0.0));
        assert_eq!(pointer.normalized(), Vec2::new(-1.0, 1.0));
        pointer.move_to(Vec2::new(800.0, 600.0));
        assert_eq!(pointer.normalized(), Vec2::new(1.0, -1.0));
        pointer.move_to(Vec2::new(400.0, 300.0));
        assert_eq!(pointer.normalized(), Vec2::ZERO);
    }

    #[test]
    fn resize_is_edge_triggered() {
        let mut pointer = PointerState::new(Viewport::new(800.0, 600.0));
        pointer.resize(Viewport::new(800.0, 600.0));
        assert!(!pointer.resized());

        pointer.resize(Viewport::new(1024.0, 768.0));
        assert!(pointer.resized());
        pointer.begin_frame();
        assert!(!pointer.resized());
        assert_eq!(pointer.viewport(), Viewport::new(1024.0, 768.0));
    }

    #[test]
    fn begin_frame_keeps_last_position() {
        let mut pointer = PointerState::new(Viewport::new(100.0, 100.0));
        pointer.move_to(Vec2::new(10.0, 20.0));
        assert!(pointer.moved());
        pointer.begin_frame();
        assert!(!pointer.moved());
        assert_eq!(pointer.position(), Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn leaving_clears_position_but_keeps_direction() {
        let mut pointer = PointerState::new(Viewport::new(800.0, 600.0));
        pointer.move_to(Vec2::new(800.0, 300.0));
        pointer.begin_frame();

        pointer.leave();
        assert!(pointer.moved());
        assert_eq!(pointer.position(), None);
        assert_eq!(pointer.normalized(), Vec2::new(1.0, 0.0));

        pointer.begin_frame();
        pointer.leave();
        assert!(!pointer.moved());

        pointer.move_to(Vec2::new(400.0, 300.0));
        assert_eq!(pointer.position(), Some(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn invalid_scale_factor_is_ignored() {
        let mut pointer = PointerState::new(Viewport::new(100.0, 100.0));
        pointer.set_scale_factor(0.0);
        pointer.set_scale_factor(2.0);
        assert_eq!(pointer.scale_factor, 2.0);
    }
}
