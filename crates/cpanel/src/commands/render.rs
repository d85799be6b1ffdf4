//! `render` command: markdown file to HTML.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use cpanel_config::PanelDefaults;
use cpanel_renderer::{DocumentRenderer, PanelProcessor, StrayPanelNormalizer, theme};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `render` command.
#[derive(Args)]
pub struct RenderArgs {
    /// Markdown input file.
    input: PathBuf,

    /// Output HTML file (stdout if omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file with global panel defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// External stylesheet replacing the built-in panel styles.
    #[arg(long)]
    styles: Option<PathBuf>,

    /// Emit a complete HTML page embedding the stylesheet and toggle script.
    #[arg(long)]
    standalone: bool,

    /// Skip the stray panel block normalizer pass.
    #[arg(long)]
    no_normalizer: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub fn execute(self, output: &Output) -> Result<(), CliError> {
        let defaults = PanelDefaults::load(&super::settings_path(self.config))?;
        let markdown = std::fs::read_to_string(&self.input)?;
        tracing::debug!(input = %self.input.display(), bytes = markdown.len(), "rendering");

        let mut renderer =
            DocumentRenderer::new().with_processor(PanelProcessor::new(defaults.clone()));
        if !self.no_normalizer {
            renderer = renderer.with_processor(StrayPanelNormalizer::new(defaults));
        }

        let result = renderer.render(&markdown);
        for warning in &result.warnings {
            output.warning(warning);
        }

        let html = if self.standalone {
            standalone_page(&result.html, &theme::stylesheet(self.styles.as_deref()))
        } else {
            result.html
        };

        match self.output {
            Some(path) => {
                std::fs::write(&path, html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Wrap a rendered fragment in a complete page with styles and script.
fn standalone_page(body: &str, css: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <style>\n{css}</style>\n</head>\n<body>\n{body}\n\
         <script>\n{script}</script>\n</body>\n</html>\n",
        script = theme::TOGGLE_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_page_embeds_assets() {
        let page = standalone_page("<p>hi</p>", ".x { color: red }");
        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains(".x { color: red }"));
        assert!(page.contains("<p>hi</p>"));
        assert!(page.contains("data-collapsible"));
    }
}
