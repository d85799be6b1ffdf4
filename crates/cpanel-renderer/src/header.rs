//! Header section parsing for panel blocks.
//!
//! A panel block starts with `key: value` lines and a `---` line separating
//! them from the markdown body:
//!
//! ```text
//! title: Notes
//! icon: 📌
//! ---
//! Hello **world**
//! ```
//!
//! Parsing never fails: malformed lines are dropped and a missing delimiter
//! degrades to "the whole block is content" (options are still picked up
//! from any `key: value` lines, which then also remain part of the body).

use crate::options::{PanelKey, PanelOverrides};

/// Line that ends the header section.
const HEADER_DELIMITER: &str = "---";

/// Split block text into header options and body content.
///
/// Lines are scanned from the top until a trimmed `---` line; each line
/// containing `:` is split on the first `:` with both sides trimmed, and
/// recorded under its canonical key (first spelling wins, unknown keys and
/// lines without `:` are ignored). The body is everything after the
/// delimiter, trimmed as a whole. Without a delimiter the body is the full
/// input, so plain text blocks pass through unchanged.
#[must_use]
pub fn split_header(source: &str) -> (PanelOverrides, String) {
    let mut overrides = PanelOverrides::default();
    let lines: Vec<&str> = source.split('\n').collect();
    let mut content_start = 0;

    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line == HEADER_DELIMITER {
            content_start = i + 1;
            break;
        }
        if let Some((key, value)) = line.split_once(':')
            && let Some(key) = PanelKey::from_alias(key.trim())
        {
            overrides.insert_first(key, value.trim().to_owned());
        }
    }

    let content = lines[content_start..].join("\n").trim().to_owned();
    (overrides, content)
}
