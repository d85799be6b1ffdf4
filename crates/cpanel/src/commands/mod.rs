//! CLI command implementations.

pub mod config;
pub mod render;

use std::path::PathBuf;

pub use config::ConfigCommand;
pub use render::RenderArgs;

/// Default settings filename, looked up in the working directory.
const SETTINGS_FILENAME: &str = "cpanel.toml";

/// Resolve the settings file path from an optional `--config` flag.
pub(crate) fn settings_path(config: Option<PathBuf>) -> PathBuf {
    config.unwrap_or_else(|| PathBuf::from(SETTINGS_FILENAME))
}
