//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, ShowArgs};
pub use commands::{handle_config_action, resolve_render_config, run_show};
pub use enums::Mode;
