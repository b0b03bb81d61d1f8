//! Ordered dithering applied before quantization.
//!
//! A 2x2 offset pattern is added to every channel based on the pixel's
//! position. It is stateless, so the same pixel always dithers the same way.

use super::color::Color;

/// Base 2x2 offset pattern, indexed by `[y % 2][x % 2]`.
const PATTERN: [[i32; 2]; 2] = [[-2, 0], [1, -1]];

/// Default multiplier for the base pattern (offsets in -4..=2).
pub const DEFAULT_DITHER_STRENGTH: i16 = 2;

/// Channel offset applied at `(x, y)` for the given strength.
#[inline]
pub fn offset(x: u32, y: u32, strength: i16) -> i32 {
    PATTERN[(y % 2) as usize][(x % 2) as usize] * strength as i32
}

/// Dither a color at `(x, y)` with the default strength.
pub fn dither(color: Color, x: u32, y: u32) -> Color {
    dither_with_strength(color, x, y, DEFAULT_DITHER_STRENGTH)
}

/// Dither a color at `(x, y)`, scaling the pattern by `strength`.
pub fn dither_with_strength(color: Color, x: u32, y: u32, strength: i16) -> Color {
    color.offset(offset(x, y, strength))
}
