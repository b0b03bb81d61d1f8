//! Subcommand handlers for show and config actions.

use std::io::Write;
use std::path::Path;

use super::args::{ConfigAction, ShowArgs};
use crate::config::{default_path, Config, DEFAULT_CONFIG};
use crate::loader;
use crate::render::{self, RenderConfig};
use crate::terminal;

/// Build the effective render settings.
///
/// Precedence: command line, then config file, then built-in defaults
/// sized to the terminal. `detect_terminal` is only called when neither
/// the command line nor the config file fixes the output size.
pub fn resolve_render_config(
    args: &ShowArgs,
    file: &Config,
    detect_terminal: impl FnOnce() -> Option<(u16, u16)>,
) -> Result<RenderConfig, String> {
    let dimensions = args.dimensions()?;

    let base = if dimensions.is_some() || file.render.size().is_some() {
        RenderConfig::default()
    } else {
        terminal_defaults(detect_terminal())
    };

    let mut config = file.render.apply(base);
    if let Some(mode) = args.render_mode() {
        config.mode = mode;
    }
    if args.no_dither {
        config.use_dither = false;
    }
    if let Some((width, height)) = dimensions {
        config = config.with_size(width, height);
    }
    Ok(config)
}

/// Defaults sized to a detected terminal, leaving the last row for the
/// prompt. Without a terminal the built-in 100x28 grid is used as is.
fn terminal_defaults(detected: Option<(u16, u16)>) -> RenderConfig {
    match detected {
        Some((cols, rows)) => RenderConfig::default()
            .with_size(cols.max(1) as u32, rows.saturating_sub(1).max(1) as u32),
        None => RenderConfig::default(),
    }
}

/// Status line shown before an image is fetched or read.
fn loading_message(source: &str) -> String {
    if loader::is_remote(source) {
        format!("Downloading image from URL: {}", source)
    } else {
        format!("Loading image from path: {}", source)
    }
}

/// Load, render and print an image.
pub fn run_show(args: &ShowArgs, config_path: Option<&Path>) -> Result<(), String> {
    // Reject bad flag combinations before touching the network
    args.dimensions()?;

    let file_config = Config::load(config_path).map_err(|e| e.to_string())?;
    let render_config = resolve_render_config(args, &file_config, terminal::detect)?;

    eprintln!("{}", loading_message(&args.source));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;
    let loaded = rt
        .block_on(loader::load(&args.source))
        .map_err(|e| format!("Error loading image: {}", e))?;

    eprintln!(
        "Image loaded! Format: {}, Size: {}x{}",
        loaded.format_name(),
        loaded.width(),
        loaded.height()
    );

    let output = render::render(&loaded.image, &render_config);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", output)
        .and_then(|_| stdout.flush())
        .map_err(|e| format!("Failed to write output: {}", e))
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) -> Result<(), String> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let file_config = Config::load(Some(&path)).map_err(|e| e.to_string())?;
            let base = match file_config.render.size() {
                Some(_) => RenderConfig::default(),
                None => terminal_defaults(terminal::detect()),
            };
            let config = file_config.render.apply(base);

            println!("Current configuration:");
            println!("  Mode: {}", config.mode.name());
            println!("  Dither: {}", if config.use_dither { "yes" } else { "no" });
            println!("  Max size: {}x{}", config.max_width, config.max_height);
            println!("  Aspect ratio: {}", config.char_aspect_ratio);
            println!("  Luma threshold: {}", config.luma_threshold);
            println!("  Dither strength: {}", config.dither_strength);
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'termuwu config show' to view current settings.",
                    path.display()
                ));
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Error creating config directory: {}", e))?;
            }

            std::fs::write(&path, DEFAULT_CONFIG)
                .map_err(|e| format!("Error writing config file: {}", e))?;

            println!("Created config file: {}", path.display());
            Ok(())
        }
    }
}
