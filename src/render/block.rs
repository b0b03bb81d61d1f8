//! Solid block rendering: one sample per cell, drawn as a colored space.

use super::color::quantize;
use super::output::{Line, Output, StyledGlyph};
use super::sample::{sample, PixelSource};
use super::RenderConfig;

/// Render a `width` x `height` grid of background-colored spaces.
pub(super) fn render<S: PixelSource + ?Sized>(
    source: &S,
    config: &RenderConfig,
    width: u32,
    height: u32,
) -> Output {
    let mut output = Output::with_capacity(height as usize);

    for y in 0..height {
        let line = (0..width)
            .map(|x| {
                let color = config.apply_dither(sample(source, x, y, width, height), x, y);
                StyledGlyph::background(' ', quantize(color))
            })
            .collect::<Line>();
        output.push_line(line);
    }

    output
}
