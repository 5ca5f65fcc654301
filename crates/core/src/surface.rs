//! 2D drawing surface consumed by the particle field and wireframe pass.

use crate::color::Rgba;
use glam::Vec2;

/// Minimal immediate-mode 2D drawing context.
///
/// Coordinates are logical pixels, origin top-left, y down.
pub trait DrawSurface {
    /// Clear the `width` x `height` region starting at the origin.
    fn clear(&mut self, width: f32, height: f32);

    /// Fill an axis-aligned square whose top-left corner is `origin`.
    fn fill_square(&mut self, origin: Vec2, size: f32, color: Rgba);

    /// Stroke a straight line.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn clear(&mut self, width: f32, height: f32) {
        (**self).clear(width, height);
    }

    fn fill_square(&mut self, origin: Vec2, size: f32, color: Rgba) {
        (**self).fill_square(origin, size, color);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        (**self).stroke_line(from, to, width, color);
    }
}
