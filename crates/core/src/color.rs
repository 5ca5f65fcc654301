//! RGBA colors in the `rgba(r, g, b, a)` convention used by the page.

use serde::{Deserialize, Serialize};

/// 8-bit RGB with a floating point alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha (0.0 transparent, 1.0 opaque).
    pub a: f32,
}

impl Rgba {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Same color with a different alpha (clamped to [0, 1]).
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Scale the RGB channels by `factor` (clamped), keeping alpha.
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Alpha as an 8-bit value.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        let c = Rgba::hex(0x00f3ff);
        assert_eq!((c.r, c.g, c.b), (0, 243, 255));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(2.0).a, 1.0);
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(-1.0).alpha_u8(), 0);
    }

    #[test]
    fn scaled_saturates() {
        let c = Rgba::rgb(200, 100, 0).scaled(2.0);
        assert_eq!((c.r, c.g, c.b), (255, 200, 0));
    }
}
