//! `config` subcommands: inspect and update the persisted panel defaults.
//!
//! The settings surface for panel defaults: one flag per field, applied as
//! a [`SettingsUpdate`] and persisted wholesale. Values are accepted as-is;
//! an invalid CSS string only ever shows up visually in rendered panels.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use cpanel_config::{PanelDefaults, SettingsUpdate};

use crate::error::CliError;
use crate::output::Output;

/// Global panel default settings commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the active panel defaults as TOML.
    Show(ShowArgs),
    /// Update one or more panel defaults and persist them.
    Set(SetArgs),
}

/// Arguments for `config show`.
#[derive(Args)]
pub struct ShowArgs {
    /// Settings file with global panel defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Arguments for `config set`.
#[derive(Args)]
pub struct SetArgs {
    /// Settings file with global panel defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default border color for panels.
    #[arg(long)]
    border_color: Option<String>,

    /// Default border width for panels.
    #[arg(long)]
    border_width: Option<String>,

    /// Default border radius for panels.
    #[arg(long)]
    border_radius: Option<String>,

    /// Default panel background (colors, gradients, images).
    #[arg(long)]
    background: Option<String>,

    /// Default header background.
    #[arg(long)]
    header_background: Option<String>,

    /// Default header text color.
    #[arg(long)]
    header_text_color: Option<String>,

    /// Default header height (e.g. 48px, 3rem).
    #[arg(long)]
    header_height: Option<String>,

    /// Make panels collapsible by default.
    #[arg(long)]
    collapsible: Option<bool>,

    /// Start panels collapsed by default.
    #[arg(long)]
    collapsed: Option<bool>,
}

impl SetArgs {
    fn into_update(self) -> (Option<PathBuf>, SettingsUpdate) {
        let update = SettingsUpdate {
            border_color: self.border_color,
            border_width: self.border_width,
            border_radius: self.border_radius,
            background: self.background,
            header_background: self.header_background,
            header_text_color: self.header_text_color,
            header_height: self.header_height,
            collapsible: self.collapsible,
            collapsed: self.collapsed,
        };
        (self.config, update)
    }
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(self, output: &Output) -> Result<(), CliError> {
        match self {
            Self::Show(args) => {
                let path = super::settings_path(args.config);
                let defaults = PanelDefaults::load(&path)?;
                let toml = toml::to_string_pretty(&defaults)
                    .map_err(cpanel_config::ConfigError::Serialize)?;
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(toml.as_bytes())?;
                Ok(())
            }
            Self::Set(args) => {
                let (config, update) = args.into_update();
                if update.is_empty() {
                    output.warning("No settings given; nothing to change");
                    return Ok(());
                }
                let path = super::settings_path(config);
                let mut defaults = PanelDefaults::load(&path)?;
                defaults.apply(&update);
                defaults.save(&path)?;
                output.success(&format!("Updated {}", path.display()));
                Ok(())
            }
        }
    }
}
