//! Draw surfaces that record or count instead of rendering.

use glam::Vec2;
use holoexpo_core::{DrawSurface, Rgba};

/// A single recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// `clear(width, height)`.
    Clear {
        /// Cleared width.
        width: f32,
        /// Cleared height.
        height: f32,
    },
    /// `fill_square(origin, size, color)`.
    FillSquare {
        /// Top-left corner.
        origin: Vec2,
        /// Side length.
        size: f32,
        /// Fill color.
        color: Rgba,
    },
    /// `stroke_line(from, to, width, color)`.
    StrokeLine {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Line width.
        width: f32,
        /// Stroke color.
        color: Rgba,
    },
}

/// Surface that keeps every draw call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Number of `fill_square` calls.
    pub fn fills(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillSquare { .. }))
            .count()
    }

    /// Number of `stroke_line` calls.
    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count()
    }

    /// Number of `clear` calls.
    pub fn clears(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_square(&mut self, origin: Vec2, size: f32, color: Rgba) {
        self.commands
            .push(DrawCommand::FillSquare { origin, size, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }
}

/// Surface that only counts calls; used by long headless runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSurface {
    /// `clear` calls.
    pub clears: usize,
    /// `fill_square` calls.
    pub fills: usize,
    /// `stroke_line` calls.
    pub lines: usize,
}

impl CountingSurface {
    /// Create a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for CountingSurface {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }

    fn fill_square(&mut self, _origin: Vec2, _size: f32, _color: Rgba) {
        self.fills += 1;
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgba) {
        self.lines += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_call_order() {
        let mut surface = RecordingSurface::new();
        surface.clear(10.0, 20.0);
        surface.fill_square(Vec2::ONE, 2.0, Rgba::rgb(1, 2, 3));
        surface.stroke_line(Vec2::ZERO, Vec2::ONE, 0.5, Rgba::rgb(4, 5, 6));
        assert_eq!(surface.clears(), 1);
        assert_eq!(surface.fills(), 1);
        assert_eq!(surface.lines(), 1);
        assert!(matches!(surface.commands()[0], DrawCommand::Clear { .. }));

        surface.reset();
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn counting_through_mut_ref() {
        let mut counter = CountingSurface::new();
        {
            let mut borrowed = &mut counter;
            borrowed.fill_square(Vec2::ZERO, 1.0, Rgba::rgb(0, 0, 0));
        }
        assert_eq!(counter.fills, 1);
    }
}
