//! termuwu library crate.
//!
//! Renders decoded images as ANSI 256-color terminal text using solid
//! blocks, half blocks or braille patterns. The engine lives in [`render`];
//! the other modules load images, read configuration and drive the CLI.

pub mod cli;
pub mod config;
pub mod loader;
pub mod render;
pub mod terminal;
