//! Half-block rendering: two vertically stacked samples per cell.
//!
//! The top sample becomes the foreground of an upper-half-block glyph and
//! the bottom sample its background. Cells whose halves quantize to the
//! same index collapse to a plain background-colored space.

use super::color::quantize;
use super::output::{Line, Output, StyledGlyph, UPPER_HALF_BLOCK};
use super::sample::{sample, PixelSource};
use super::RenderConfig;

/// Render a `width` x `height` pixel grid as `height / 2` rows.
pub(super) fn render<S: PixelSource + ?Sized>(
    source: &S,
    config: &RenderConfig,
    width: u32,
    height: u32,
) -> Output {
    let mut output = Output::with_capacity(height.div_ceil(2) as usize);

    for top_y in (0..height).step_by(2) {
        let bottom_y = top_y + 1;
        let line = (0..width)
            .map(|x| {
                let top = sample(source, x, top_y, width, height);
                // Odd heights reuse the top sample for the missing half
                let bottom = if bottom_y < height {
                    sample(source, x, bottom_y, width, height)
                } else {
                    top
                };

                let top = quantize(config.apply_dither(top, x, top_y));
                let bottom = quantize(config.apply_dither(bottom, x, bottom_y));
                cell(top, bottom)
            })
            .collect::<Line>();
        output.push_line(line);
    }

    output
}

fn cell(top: u8, bottom: u8) -> StyledGlyph {
    if top == bottom {
        StyledGlyph::background(' ', top)
    } else {
        StyledGlyph::new(UPPER_HALF_BLOCK, Some(top), Some(bottom))
    }
}
