//! Pointer interaction with on-page anchors.
//!
//! Maps anchor rectangles to world positions and turns per-frame hover hits
//! into enter/leave transitions.

pub mod hover;
pub mod mapper;

pub use hover::{HoverEvent, HoverTracker};
pub use mapper::ScreenMapper;
