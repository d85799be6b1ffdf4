//! cpanel CLI - collapsible panel blocks for markdown.
//!
//! Provides commands for:
//! - `render`: Render a markdown file with panel blocks to HTML
//! - `config show` / `config set`: Inspect and update the persisted
//!   global panel defaults

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigCommand, RenderArgs};
use output::Output;

/// cpanel - styled, collapsible panels for fenced markdown blocks.
#[derive(Parser)]
#[command(name = "cpanel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file to HTML.
    Render(RenderArgs),
    /// Global panel default settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let output = Output::new();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Config(cmd) => cmd.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
