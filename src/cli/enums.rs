//! CLI enum types for render options.

use clap::ValueEnum;

use crate::render::RenderMode;

/// Glyph mode for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    Block,
    #[default]
    HalfBlock,
    Braille,
}

impl From<Mode> for RenderMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Block => RenderMode::Block,
            Mode::HalfBlock => RenderMode::HalfBlock,
            Mode::Braille => RenderMode::Braille,
        }
    }
}
