//! 24-bit color and the xterm 256-color quantizer.
//!
//! Colors are mapped onto the 6x6x6 color cube (indices 16-231) or the
//! 24-step grayscale ramp (indices 232-255). Near-neutral colors are
//! checked against both and the perceptually closer candidate wins.

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Index into the terminal's 256-color palette.
pub type PaletteIndex = u8;

/// Reserved index for pure black (origin of the color cube).
pub const BLACK_INDEX: PaletteIndex = 16;

/// First index of the grayscale ramp.
pub const GRAY_RAMP_START: PaletteIndex = 232;

/// Last index of the grayscale ramp.
pub const GRAY_RAMP_END: PaletteIndex = 255;

/// First index of the 6x6x6 color cube.
pub const CUBE_START: PaletteIndex = 16;

/// Last index of the 6x6x6 color cube.
pub const CUBE_END: PaletteIndex = 231;

/// Channel value a cube level renders as.
const CUBE_LEVELS: [u8; 6] = [0, 47, 95, 142, 189, 236];

/// A channel at or above `CUBE_THRESHOLDS[i]` lands in level `i + 1`.
const CUBE_THRESHOLDS: [u8; 5] = [48, 95, 142, 189, 236];

/// Colors with every channel below this get `DARK_BOOST` added.
const DARK_CUTOFF: u8 = 15;
const DARK_BOOST: i32 = 10;

/// Maximum channel spread treated as pure gray.
const GRAY_SPREAD: u8 = 10;

/// Maximum channel spread where the ramp competes with the cube.
const NEAR_GRAY_SPREAD: u8 = 30;

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// ITU-R BT.601 luma: 0.299R + 0.587G + 0.114B.
    pub fn luma(&self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }

    /// Difference between the largest and smallest channel.
    pub fn spread(&self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }

    /// Add `delta` to every channel, saturating at 0 and 255.
    pub fn offset(&self, delta: i32) -> Self {
        Self::new(
            clamp_add_signed(self.r, delta),
            clamp_add_signed(self.g, delta),
            clamp_add_signed(self.b, delta),
        )
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Clamp a widened integer into a channel value.
#[inline]
pub fn clamp_to_byte(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Add a signed delta to a channel without wrapping.
#[inline]
pub fn clamp_add_signed(channel: u8, delta: i32) -> u8 {
    clamp_to_byte((channel as i32).saturating_add(delta))
}

/// Map a 24-bit color to the closest entry of the 256-color palette.
///
/// The result is always in `16..=255`: pure black is pinned to
/// [`BLACK_INDEX`], grays go to the ramp, everything else goes to the cube
/// unless it is close enough to neutral that the finer ramp is a better fit.
pub fn quantize(color: Color) -> PaletteIndex {
    if color == Color::BLACK {
        return BLACK_INDEX;
    }

    // Nudge very dark colors up so they don't vanish on dark backgrounds
    let color = if color.r < DARK_CUTOFF && color.g < DARK_CUTOFF && color.b < DARK_CUTOFF {
        color.offset(DARK_BOOST)
    } else {
        color
    };

    let spread = color.spread();
    if spread <= GRAY_SPREAD {
        return gray_ramp_index(color);
    }

    let cube = cube_index(color);
    if spread <= NEAR_GRAY_SPREAD {
        let gray = gray_ramp_index(color);
        if distance(color, gray) < distance(color, cube) {
            return gray;
        }
    }

    cube
}

/// Approximate RGB value a palette index displays as.
///
/// Cube and ramp entries follow the xterm defaults. The first 16 colors
/// are theme-defined, so they fall back to black, white or mid-gray.
pub fn approximate_rgb(index: PaletteIndex) -> Color {
    match index {
        GRAY_RAMP_START..=GRAY_RAMP_END => {
            // 24 steps spanning 8..=248
            let step = (index - GRAY_RAMP_START) as u32;
            Color::gray((8 + step * 240 / 23) as u8)
        }
        CUBE_START..=CUBE_END => {
            let i = (index - CUBE_START) as usize;
            Color::new(
                CUBE_LEVELS[(i / 36) % 6],
                CUBE_LEVELS[(i / 6) % 6],
                CUBE_LEVELS[i % 6],
            )
        }
        0 => Color::BLACK,
        7 => Color::WHITE,
        _ => Color::gray(128),
    }
}

/// Weighted squared distance between a color and what `index` displays as.
///
/// Channels are weighted 2:4:3 to roughly track human sensitivity.
pub fn distance(color: Color, index: PaletteIndex) -> u32 {
    let other = approximate_rgb(index);
    let dr = color.r as i32 - other.r as i32;
    let dg = color.g as i32 - other.g as i32;
    let db = color.b as i32 - other.b as i32;
    (2 * dr * dr + 4 * dg * dg + 3 * db * db) as u32
}

/// Bucket a channel into one of the six cube levels.
fn cube_level(value: u8) -> u8 {
    CUBE_THRESHOLDS.iter().take_while(|&&t| value >= t).count() as u8
}

fn cube_index(color: Color) -> PaletteIndex {
    CUBE_START + 36 * cube_level(color.r) + 6 * cube_level(color.g) + cube_level(color.b)
}

/// Nearest step of the 24-entry grayscale ramp by luma.
fn gray_ramp_index(color: Color) -> PaletteIndex {
    let gray = color.luma() as u8;
    if gray < 10 {
        return GRAY_RAMP_START;
    }
    if gray > 245 {
        return GRAY_RAMP_END;
    }
    GRAY_RAMP_START + ((gray - 8) as u32 * 23 / 240) as u8
}
