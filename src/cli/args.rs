//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Mode;
use crate::render::RenderMode;

/// Render images beautifully in your terminal
#[derive(Parser, Debug)]
#[command(name = "termuwu")]
#[command(version, about = "Render images in your terminal with ANSI colors", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render a local image
    termuwu show /path/to/your/image.jpg

    # Download and render from URL (wrap in quotes)
    termuwu show \"https://example.com/image.jpg\"

    # Custom dimensions with full blocks
    termuwu show image.png --width 80 --height 40 --full

    # High-detail rendering with braille patterns
    termuwu show image.jpg --braille --no-dither")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an image from a local path or URL in the terminal
    Show(ShowArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Image path or http(s) URL
    pub source: String,

    /// Use full character blocks (less detail)
    #[arg(short = 'f', long, conflicts_with_all = ["braille", "mode"])]
    pub full: bool,

    /// Use braille patterns (more detail)
    #[arg(short = 'b', long, conflicts_with = "mode")]
    pub braille: bool,

    /// Glyph mode
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Disable dithering (less color noise, more banding)
    #[arg(short = 'n', long)]
    pub no_dither: bool,

    /// Output width in characters (0 for auto)
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Output height in lines (0 for auto)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,
}

impl ShowArgs {
    /// Mode chosen on the command line, if any.
    pub fn render_mode(&self) -> Option<RenderMode> {
        if self.full {
            Some(RenderMode::Block)
        } else if self.braille {
            Some(RenderMode::Braille)
        } else {
            self.mode.map(RenderMode::from)
        }
    }

    /// Explicit output size. Width and height must be given together.
    pub fn dimensions(&self) -> Result<Option<(u32, u32)>, String> {
        let width = self.width.filter(|&w| w > 0);
        let height = self.height.filter(|&h| h > 0);
        match (width, height) {
            (Some(w), Some(h)) => Ok(Some((w, h))),
            (None, None) => Ok(None),
            _ => Err(
                "If specifying custom dimensions, both --width (-W) and --height (-H) must be provided."
                    .to_string(),
            ),
        }
    }
}
