//! Rendering of 3D shapes onto a 2D drawing surface.

pub mod wireframe;

pub use wireframe::{draw_icons, draw_wireframe, WireStyle};
