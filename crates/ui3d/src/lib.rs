//! 3D hover icons synced to on-page anchors.
//!
//! Each feature item on the page carries a shape marker and an icon slot.
//! This crate binds a 3D icon to every marked anchor, keeps it positioned
//! over the anchor's live rectangle, and animates it on hover.
//!
//! # Example
//!
//! ```rust
//! use holoexpo_camera::PerspectiveCamera;
//! use holoexpo_core::{ScreenRect, Viewport};
//! use holoexpo_ui3d::{HoverIconController, StaticLayout};
//!
//! let mut icons = HoverIconController::new(0.0);
//! icons.setup([("feature-0", Some("cube")), ("feature-1", Some("torus"))]);
//!
//! let mut layout = StaticLayout::new();
//! layout.insert("feature-0", ScreenRect::new(100.0, 200.0, 64.0, 64.0));
//!
//! // In your frame loop:
//! icons.pointer_enter("feature-0", 0.0);
//! icons.update(0.016, 0.016, &layout, Viewport::new(1280.0, 720.0), &PerspectiveCamera::default());
//! ```

pub mod components;
pub mod interaction;
pub mod layout;
pub mod manager;
pub mod render;

// Re-export commonly used types
pub use components::{HoverIcon, IconShape, UIComponent, REST_EMISSIVE, WIRE_SCALE};
pub use interaction::{HoverEvent, HoverTracker, ScreenMapper};
pub use layout::{AnchorLayout, StaticLayout};
pub use manager::{HoverIconController, HOVER_DURATION, HOVER_EMISSIVE, HOVER_SCALE, ICON_SPIN};
pub use render::{draw_icons, draw_wireframe, WireStyle};
