//! Screen-space geometry: viewport size and element rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Viewport size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, clamping negative sizes to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Area in square pixels.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Width / height, or 1.0 for an empty viewport.
    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Center point of the viewport.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Convert a screen point to normalized device coordinates.
    ///
    /// x grows to the right and y grows upward, both in [-1, 1] inside the
    /// viewport. An empty viewport maps everything to the origin.
    pub fn to_ndc(&self, point: Vec2) -> Vec2 {
        if self.is_empty() {
            return Vec2::ZERO;
        }
        Vec2::new(
            point.x / self.width * 2.0 - 1.0,
            -(point.y / self.height) * 2.0 + 1.0,
        )
    }

    /// Inverse of [`Viewport::to_ndc`].
    pub fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

/// Axis-aligned rectangle in screen space (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width (non-negative).
    pub width: f32,
    /// Height (non-negative).
    pub height: f32,
}

impl ScreenRect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Create a rectangle of `size` centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x * 0.5,
            center.y - size.y * 0.5,
            size.x,
            size.y,
        )
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Whether `point` lies inside (edges inclusive on the top-left).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }

    /// Fraction of this rectangle's area that is inside `viewport`.
    ///
    /// Zero-area rectangles count as fully visible when their origin is on
    /// screen, matching how layout engines report intersection for them.
    pub fn visible_fraction(&self, viewport: Viewport) -> f32 {
        let x0 = self.left.max(0.0);
        let y0 = self.top.max(0.0);
        let x1 = self.right().min(viewport.width);
        let y1 = self.bottom().min(viewport.height);
        let area = self.width * self.height;
        if area <= 0.0 {
            let on_screen = self.left >= 0.0
                && self.left <= viewport.width
                && self.top >= 0.0
                && self.top <= viewport.height;
            return if on_screen { 1.0 } else { 0.0 };
        }
        if x1 <= x0 || y1 <= y0 {
            return 0.0;
        }
        ((x1 - x0) * (y1 - y0) / area).clamp(0.0, 1.0)
    }
}
