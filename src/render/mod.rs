//! Image-to-terminal rendering engine.
//!
//! Converts a decoded image into ANSI 256-color text:
//!
//! 1. **Sizing** - fit the image to the character grid for the chosen mode
//! 2. **Sampling** - nearest-neighbor lookup of the source pixel per cell
//! 3. **Dithering** - optional 2x2 ordered dither to break up banding
//! 4. **Quantization** - map each color onto the 256-color palette
//! 5. **Glyphs** - emit blocks, half-blocks or braille patterns
//!
//! # Modes
//!
//! - `Block` - one colored space per cell
//! - `HalfBlock` - two stacked pixels per cell using `▀`
//! - `Braille` - 2x4 dots per cell, one averaged color per cell
//!
//! Rendering is synchronous and stateless; the same input always produces
//! the same output.

mod block;
pub mod braille;
pub mod color;
mod dimensions;
pub mod dither;
mod halfblock;
mod output;
mod sample;

use serde::Deserialize;

pub use color::{approximate_rgb, quantize, Color, PaletteIndex};
pub use dimensions::{compute_output_size, floor_to_min, DEFAULT_CHAR_ASPECT_RATIO};
pub use dither::DEFAULT_DITHER_STRENGTH;
pub use output::{Line, Output, StyledGlyph, RESET, UPPER_HALF_BLOCK};
pub use sample::{sample, source_coord, PixelSource};

/// Default luma above which a braille dot is raised.
pub const DEFAULT_LUMA_THRESHOLD: u8 = 128;

/// Fallback grid width when the terminal size is unknown.
pub const DEFAULT_MAX_WIDTH: u32 = 100;

/// Fallback grid height when the terminal size is unknown.
pub const DEFAULT_MAX_HEIGHT: u32 = 28;

/// Glyph encoding used for the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// One sample per cell, drawn as a colored space
    Block,
    /// Two stacked samples per cell
    #[default]
    HalfBlock,
    /// Eight luma-thresholded dots per cell
    Braille,
}

impl RenderMode {
    /// Human-readable name, matching the config file spelling.
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Block => "block",
            RenderMode::HalfBlock => "half-block",
            RenderMode::Braille => "braille",
        }
    }
}

/// Settings for a single render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub mode: RenderMode,
    /// Maximum output width in characters
    pub max_width: u32,
    /// Maximum output height in lines
    pub max_height: u32,
    pub use_dither: bool,
    /// Height:width correction for block and braille sizing
    pub char_aspect_ratio: f32,
    /// Braille dot threshold (0-255)
    pub luma_threshold: u8,
    /// Multiplier on the 2x2 dither pattern
    pub dither_strength: i16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            use_dither: true,
            char_aspect_ratio: DEFAULT_CHAR_ASPECT_RATIO,
            luma_threshold: DEFAULT_LUMA_THRESHOLD,
            dither_strength: DEFAULT_DITHER_STRENGTH,
        }
    }
}

impl RenderConfig {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    pub fn with_dither(mut self, use_dither: bool) -> Self {
        self.use_dither = use_dither;
        self
    }

    pub fn with_aspect_ratio(mut self, char_aspect_ratio: f32) -> Self {
        self.char_aspect_ratio = char_aspect_ratio;
        self
    }

    pub fn with_luma_threshold(mut self, luma_threshold: u8) -> Self {
        self.luma_threshold = luma_threshold;
        self
    }

    pub fn with_dither_strength(mut self, dither_strength: i16) -> Self {
        self.dither_strength = dither_strength;
        self
    }

    /// Output pixel grid for a source of the given size.
    pub fn output_size(&self, source_width: u32, source_height: u32) -> (u32, u32) {
        compute_output_size(
            source_width,
            source_height,
            self.mode,
            self.max_width,
            self.max_height,
            self.char_aspect_ratio,
        )
    }

    /// Dither `color` at `(x, y)` if enabled, otherwise return it unchanged.
    pub fn apply_dither(&self, color: Color, x: u32, y: u32) -> Color {
        if self.use_dither {
            dither::dither_with_strength(color, x, y, self.dither_strength)
        } else {
            color
        }
    }
}

/// Render an image to styled terminal rows.
///
/// A source with no pixels produces an empty [`Output`].
pub fn render<S: PixelSource + ?Sized>(source: &S, config: &RenderConfig) -> Output {
    if source.is_empty() {
        log::debug!(
            "Skipping render of empty {}x{} source",
            source.width(),
            source.height()
        );
        return Output::default();
    }

    let (width, height) = config.output_size(source.width(), source.height());
    log::debug!(
        "Rendering {}x{} source as {} on a {}x{} grid",
        source.width(),
        source.height(),
        config.mode.name(),
        width,
        height
    );

    match config.mode {
        RenderMode::Block => block::render(source, config, width, height),
        RenderMode::HalfBlock => halfblock::render(source, config, width, height),
        RenderMode::Braille => braille::render(source, config, width, height),
    }
}
