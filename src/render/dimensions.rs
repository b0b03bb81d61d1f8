//! Output grid sizing for each render mode.

use super::RenderMode;

/// Default height:width ratio used to correct for tall terminal glyphs.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 0.5;

/// Clamp a computed extent up to `min`.
#[inline]
pub fn floor_to_min(value: i64, min: u32) -> u32 {
    if value < min as i64 {
        min
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

/// Compute the output grid for a source image.
///
/// Half-block mode stacks two image rows per character row, so the height
/// budget is doubled and the result is forced even. Block and braille
/// modes scale the height budget by `aspect_ratio` instead, then divide it
/// back out of the final height.
///
/// # Arguments
/// * `source_width` - Width of the source image in pixels
/// * `source_height` - Height of the source image in pixels
/// * `mode` - Glyph mode the grid is for
/// * `max_width` - Maximum output width in characters
/// * `max_height` - Maximum output height in lines
/// * `aspect_ratio` - Glyph cell height:width correction factor
///
/// # Returns
/// `(width, height)` in output pixels. Both are at least 1; half-block
/// height is even and at least 2.
pub fn compute_output_size(
    source_width: u32,
    source_height: u32,
    mode: RenderMode,
    max_width: u32,
    max_height: u32,
    aspect_ratio: f32,
) -> (u32, u32) {
    let src_w = source_width.max(1) as f64;
    let src_h = source_height.max(1) as f64;
    let max_w = max_width as f64;
    let max_h = max_height as f64;

    match mode {
        RenderMode::HalfBlock => {
            let scale = (max_w / src_w).min(max_h * 2.0 / src_h);
            let width = (src_w * scale) as i64;
            let mut height = (src_h * scale) as i64;
            if height % 2 != 0 {
                height -= 1;
            }
            (floor_to_min(width, 1), floor_to_min(height, 2))
        }
        RenderMode::Block | RenderMode::Braille => {
            let aspect = sanitize_aspect(aspect_ratio);
            let scale = (max_w / src_w).min(max_h * aspect / src_h);
            let width = (src_w * scale) as i64;
            let height = (src_h * scale / aspect) as i64;
            (floor_to_min(width, 1), floor_to_min(height, 1))
        }
    }
}

fn sanitize_aspect(aspect_ratio: f32) -> f64 {
    if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio as f64
    } else {
        DEFAULT_CHAR_ASPECT_RATIO as f64
    }
}
