// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Display sink contract used by the drawables.

use crate::sim::Vector;

/// 8×8 monochrome bitmap. Row `r` is `rows[r]`; bit 7 is the leftmost pixel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Glyph {
    pub rows: [u8; 8],
}

impl Glyph {
    pub const SIZE: i32 = 8;

    /// All pixels dark. Writing it erases an 8×8 region.
    pub const BLANK: Glyph = Glyph { rows: [0x00; 8] };

    /// All pixels lit.
    pub const SOLID: Glyph = Glyph { rows: [0xFF; 8] };

    /// Filled disc of radius 4.
    pub const BALL: Glyph = Glyph {
        rows: [
            0b0011_1100,
            0b0111_1110,
            0b1111_1111,
            0b1111_1111,
            0b1111_1111,
            0b1111_1111,
            0b0111_1110,
            0b0011_1100,
        ],
    };

    #[inline]
    pub const fn new(rows: [u8; 8]) -> Self {
        Self { rows }
    }

    /// Whether the pixel at column `col`, row `row` (both `0..8`) is lit.
    #[inline]
    pub fn pixel(&self, col: usize, row: usize) -> bool {
        (self.rows[row] >> (7 - col)) & 1 != 0
    }
}

/// Whether a write is presented immediately or held until the next flush.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Buffering {
    Buffered,
    Unbuffered,
}

/// A pixel display that accepts glyph writes and presents them on `flush`.
pub trait DisplaySink {
    type Error;

    /// Stage `glyph` with its top-left corner at `position`. Off-screen pixels are clipped.
    fn write(&mut self, position: Vector, glyph: &Glyph, mode: Buffering)
        -> Result<(), Self::Error>;

    /// Present all staged writes.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_glyph_is_round() {
        // Corners dark, centre lit
        assert!(!Glyph::BALL.pixel(0, 0));
        assert!(!Glyph::BALL.pixel(7, 7));
        assert!(Glyph::BALL.pixel(3, 3));
        assert!(Glyph::BALL.pixel(0, 3));
        assert!(Glyph::BALL.pixel(7, 4));
    }

    #[test]
    fn test_blank_and_solid() {
        for row in 0..8 {
            for col in 0..8 {
                assert!(!Glyph::BLANK.pixel(col, row));
                assert!(Glyph::SOLID.pixel(col, row));
            }
        }
    }
}
