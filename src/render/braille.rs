//! Braille rendering for the highest detail mode.
//!
//! Each braille character covers a 2x4 block of output pixels. A dot is
//! raised where the sampled luma exceeds the threshold, and the whole cell
//! is drawn in the average color of its samples.

use super::color::{quantize, Color};
use super::output::{Line, Output, StyledGlyph};
use super::sample::{sample, PixelSource};
use super::RenderConfig;

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Bit for each dot, indexed by `[column][row]`.
///
/// ```text
/// 0x01  0x08
/// 0x02  0x10
/// 0x04  0x20
/// 0x40  0x80
/// ```
const DOT_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// Bit for the dot at column `dx` (0-1) and row `dy` (0-3).
#[inline]
fn dot_bit(dx: u32, dy: u32) -> u8 {
    DOT_BITS[dx as usize][dy as usize]
}

/// Braille character for an 8-bit dot pattern (U+2800 to U+28FF).
pub fn pattern_to_char(pattern: u8) -> char {
    char::from_u32(BRAILLE_BASE as u32 + pattern as u32).unwrap_or(BRAILLE_BASE)
}

/// Number of braille cells needed to cover a `width` x `height` pixel grid.
pub fn cell_grid(width: u32, height: u32) -> (u32, u32) {
    (width.div_ceil(2).max(1), height.div_ceil(4).max(1))
}

/// Running color total for averaging a cell's samples.
#[derive(Debug, Default)]
struct ColorSum {
    r: u32,
    g: u32,
    b: u32,
    count: u32,
}

impl ColorSum {
    fn add(&mut self, color: Color) {
        self.r += color.r as u32;
        self.g += color.g as u32;
        self.b += color.b as u32;
        self.count += 1;
    }

    fn average(&self) -> Color {
        if self.count == 0 {
            return Color::BLACK;
        }
        Color::new(
            (self.r / self.count) as u8,
            (self.g / self.count) as u8,
            (self.b / self.count) as u8,
        )
    }
}

/// Render a `width` x `height` pixel grid as braille cells.
pub(super) fn render<S: PixelSource + ?Sized>(
    source: &S,
    config: &RenderConfig,
    width: u32,
    height: u32,
) -> Output {
    let (cells_w, cells_h) = cell_grid(width, height);
    let threshold = config.luma_threshold as f64;
    let mut output = Output::with_capacity(cells_h as usize);

    for cy in 0..cells_h {
        let mut line = Line::with_capacity(cells_w as usize);
        for cx in 0..cells_w {
            let mut pattern = 0u8;
            let mut sum = ColorSum::default();

            for dy in 0..4 {
                for dx in 0..2 {
                    let px = cx * 2 + dx;
                    let py = cy * 4 + dy;
                    if px >= width || py >= height {
                        continue;
                    }

                    let color = sample(source, px, py, width, height);
                    if color.luma() > threshold {
                        pattern |= dot_bit(dx, dy);
                    }
                    sum.add(color);
                }
            }

            line.push(StyledGlyph::foreground(
                pattern_to_char(pattern),
                quantize(sum.average()),
            ));
        }
        output.push_line(line);
    }

    output
}
