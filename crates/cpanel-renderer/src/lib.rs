//! Collapsible panel blocks for markdown.
//!
//! Turns fenced blocks tagged `cpanel` into styled, collapsible HTML
//! panels. A block's leading `key: value` lines (ended by a `---` line)
//! override the process-wide [`PanelDefaults`](cpanel_config::PanelDefaults);
//! the rest is markdown rendered inside the panel body.
//!
//! # Architecture
//!
//! - [`split_header`] extracts raw option overrides and body content.
//! - [`PanelStyle::resolve`] merges overrides over the global defaults.
//! - [`render_panel`] builds the container/header/content HTML.
//! - [`DocumentRenderer`] walks a whole document, diverting fenced blocks
//!   to registered [`BlockProcessor`]s.
//! - [`StrayPanelNormalizer`] rescues panel blocks that slipped past the
//!   fenced-block interception (non-standard fence lengths, indented
//!   blocks) in a post-processing pass over the rendered HTML.
//!
//! # Example
//!
//! ```
//! use cpanel_config::PanelDefaults;
//! use cpanel_renderer::{DocumentRenderer, PanelProcessor, StrayPanelNormalizer};
//!
//! let markdown = "```cpanel\ntitle: Notes\nicon: 📌\n---\nHello **world**\n```";
//! let defaults = PanelDefaults::default();
//! let result = DocumentRenderer::new()
//!     .with_processor(PanelProcessor::new(defaults.clone()))
//!     .with_processor(StrayPanelNormalizer::new(defaults))
//!     .render(markdown);
//!
//! assert!(result.html.contains("cpanel-container"));
//! assert!(result.html.contains("<strong>world</strong>"));
//! ```

mod header;
mod normalizer;
mod options;
mod panel;
mod pipeline;
mod processor;
pub mod theme;
mod util;

pub use header::split_header;
pub use normalizer::StrayPanelNormalizer;
pub use options::{PanelKey, PanelOverrides, PanelStyle};
pub use panel::{PanelState, is_literal_icon, render_block, render_panel};
pub use pipeline::{DocumentRenderer, RenderResult};
pub use processor::{BlockProcessor, PANEL_TAG, PanelProcessor, ProcessResult};
pub use util::escape_html;
