//! 3D components placed over the page.

pub mod icon;

pub use icon::{HoverIcon, IconShape, REST_EMISSIVE, WIRE_SCALE};

use glam::Vec3;

/// Base trait for scene objects that follow the page layout.
pub trait UIComponent {
    /// Get the world position of this component
    fn position(&self) -> Vec3;

    /// Set the world position of this component
    fn set_position(&mut self, position: Vec3);

    /// Check if this component is visible
    fn is_visible(&self) -> bool;

    /// Set visibility
    fn set_visible(&mut self, visible: bool);
}
