//! Configuration file handling for termuwu.
//!
//! Loads configuration from `~/.config/termuwu/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::{RenderConfig, RenderMode};

/// Configuration file structure for termuwu.
/// Loaded from ~/.config/termuwu/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSection,
}

/// `[render]` table. Unset keys keep the built-in defaults.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    #[serde(default)]
    pub mode: Option<RenderMode>,
    #[serde(default)]
    pub dither: Option<bool>,
    #[serde(default)]
    pub aspect_ratio: Option<f32>,
    #[serde(default)]
    pub luma_threshold: Option<u8>,
    #[serde(default)]
    pub dither_strength: Option<i16>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl RenderSection {
    /// Fixed output size, when both `width` and `height` are set and non-zero.
    pub fn size(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
            _ => None,
        }
    }

    /// Layer the file settings over `base`.
    ///
    /// `width` and `height` only apply when both are set.
    pub fn apply(&self, base: RenderConfig) -> RenderConfig {
        let mut config = base;
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(dither) = self.dither {
            config.use_dither = dither;
        }
        if let Some(aspect) = self.aspect_ratio {
            config.char_aspect_ratio = aspect;
        }
        if let Some(threshold) = self.luma_threshold {
            config.luma_threshold = threshold;
        }
        if let Some(strength) = self.dither_strength {
            config.dither_strength = strength;
        }
        match self.size() {
            Some((w, h)) => config = config.with_size(w, h),
            None if self.width.is_some() || self.height.is_some() => {
                log::warn!("Ignoring config width/height: both must be set and non-zero")
            }
            None => {}
        }
        config
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("termuwu").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/termuwu/config.toml")
        })
}

/// Contents written by `termuwu config init`.
pub const DEFAULT_CONFIG: &str = r#"# termuwu configuration

[render]
# Glyph mode: block, half-block, braille
mode = "half-block"
# Ordered dithering to reduce color banding
dither = true
# Height:width correction for block and braille sizing
aspect_ratio = 0.5
# Luma (0-255) above which a braille dot is raised
luma_threshold = 128
# Multiplier on the 2x2 dither pattern
dither_strength = 2
# Fixed output size in characters (default: terminal size).
# Both must be set together.
# width = 80
# height = 24
"#;
