//! Global panel defaults for cpanel.
//!
//! Parses `cpanel.toml` settings files with serde and merges them over the
//! hardcoded defaults. The record is serialized wholesale on every change.
//!
//! Render calls read the current [`PanelDefaults`] snapshot by reference;
//! mutation goes through a single path, [`PanelDefaults::apply`], fed by a
//! [`SettingsUpdate`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Process-wide fallback values for panel options omitted from a block.
///
/// Every field accepts an arbitrary CSS string; values are not validated
/// here and invalid ones surface only visually in the rendered output.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PanelDefaults {
    /// Border color for the panel container.
    pub border_color: String,
    /// Border width for the panel container.
    pub border_width: String,
    /// Corner radius for the panel container.
    pub border_radius: String,
    /// Background for the panel content (colors, gradients, images).
    pub background: String,
    /// Background for the panel header.
    pub header_background: String,
    /// Text color for the panel header.
    pub header_text_color: String,
    /// Height of the panel header (e.g. `48px`, `3rem`).
    pub header_height: String,
    /// Whether panels respond to header clicks.
    pub collapsible: bool,
    /// Whether panels start collapsed.
    pub collapsed: bool,
}

impl Default for PanelDefaults {
    fn default() -> Self {
        Self {
            border_color: "#cccccc".to_owned(),
            border_width: "1px".to_owned(),
            border_radius: "8px".to_owned(),
            background: "#ffffff".to_owned(),
            header_background: "#f8f9fa".to_owned(),
            header_text_color: "var(--text-normal)".to_owned(),
            header_height: "48px".to_owned(),
            collapsible: true,
            collapsed: false,
        }
    }
}

/// Partial settings change produced by the settings surface.
///
/// All fields are optional. Only non-None values are applied.
#[derive(Debug, Default)]
pub struct SettingsUpdate {
    /// Override default border color.
    pub border_color: Option<String>,
    /// Override default border width.
    pub border_width: Option<String>,
    /// Override default border radius.
    pub border_radius: Option<String>,
    /// Override default panel background.
    pub background: Option<String>,
    /// Override default header background.
    pub header_background: Option<String>,
    /// Override default header text color.
    pub header_text_color: Option<String>,
    /// Override default header height.
    pub header_height: Option<String>,
    /// Override default collapsible flag.
    pub collapsible: Option<bool>,
    /// Override default collapsed flag.
    pub collapsed: Option<bool>,
}

impl SettingsUpdate {
    /// Check whether the update carries any change at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.border_color.is_none()
            && self.border_width.is_none()
            && self.border_radius.is_none()
            && self.background.is_none()
            && self.header_background.is_none()
            && self.header_text_color.is_none()
            && self.header_height.is_none()
            && self.collapsible.is_none()
            && self.collapsed.is_none()
    }
}

/// Settings error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing the settings file.
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        /// Settings file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl PanelDefaults {
    /// Load defaults from a TOML file, merged over the hardcoded defaults.
    ///
    /// A missing file is not an error: the hardcoded defaults are returned.
    /// Fields absent from the file keep their hardcoded values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Persist the full record to a TOML file.
    ///
    /// The parent directory is created if needed. The whole record is
    /// written on every change; there is no partial persistence.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply a settings update.
    ///
    /// This is the only mutation path for the defaults record; the renderer
    /// only ever sees `&PanelDefaults`.
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(border_color) = &update.border_color {
            self.border_color.clone_from(border_color);
        }
        if let Some(border_width) = &update.border_width {
            self.border_width.clone_from(border_width);
        }
        if let Some(border_radius) = &update.border_radius {
            self.border_radius.clone_from(border_radius);
        }
        if let Some(background) = &update.background {
            self.background.clone_from(background);
        }
        if let Some(header_background) = &update.header_background {
            self.header_background.clone_from(header_background);
        }
        if let Some(header_text_color) = &update.header_text_color {
            self.header_text_color.clone_from(header_text_color);
        }
        if let Some(header_height) = &update.header_height {
            self.header_height.clone_from(header_height);
        }
        if let Some(collapsible) = update.collapsible {
            self.collapsible = collapsible;
        }
        if let Some(collapsed) = update.collapsed {
            self.collapsed = collapsed;
        }
    }
}
