//! Block processor seam for fenced code block handling.
//!
//! The document pipeline walks markdown events and hands every fenced code
//! block to its registered processors. The first processor returning a
//! non-`PassThrough` result wins; anything unhandled renders as a regular
//! code block.

use std::collections::HashMap;

use cpanel_config::PanelDefaults;

use crate::panel::render_block;

/// Fence tag recognized as a panel block.
pub const PANEL_TAG: &str = "cpanel";

/// Result of processing a fenced code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Replace the code block with inline HTML.
    Inline(String),
    /// Leave the block alone; render as a normal code block.
    PassThrough,
}

/// Trait for processing special fenced code blocks.
///
/// Implementations may also hook [`post_process`](Self::post_process),
/// which runs over the fully rendered document HTML after all blocks have
/// been handled.
pub trait BlockProcessor {
    /// Process a fenced code block.
    ///
    /// # Arguments
    ///
    /// * `language` - Language identifier from the fence info string
    /// * `attrs` - `key=value` attributes parsed from the fence info
    /// * `source` - Raw content of the code block
    /// * `index` - Zero-based index of the block in the document
    fn process(
        &mut self,
        language: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult;

    /// Post-process the rendered document HTML.
    ///
    /// Default implementation is a no-op.
    fn post_process(&mut self, _html: &mut String) {}

    /// Warnings generated during processing.
    ///
    /// Default implementation returns an empty slice.
    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// Parse a fence info string into language and attributes.
///
/// Format: `language [key=value ...]`
#[must_use]
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let mut parts = info.split_whitespace();
    let language = parts.next().unwrap_or("").to_owned();

    let mut attrs = HashMap::new();
    for part in parts {
        if let Some((key, value)) = part.split_once('=') {
            let value = value.trim_matches('"').trim_matches('\'');
            attrs.insert(key.to_owned(), value.to_owned());
        }
    }

    (language, attrs)
}

/// Processor turning `cpanel` fenced blocks into panels.
///
/// Holds a snapshot of the global defaults taken when the processor is
/// created; every block it handles resolves against that snapshot.
pub struct PanelProcessor {
    defaults: PanelDefaults,
}

impl PanelProcessor {
    /// Create a processor rendering against the given defaults snapshot.
    #[must_use]
    pub fn new(defaults: PanelDefaults) -> Self {
        Self { defaults }
    }
}

impl BlockProcessor for PanelProcessor {
    fn process(
        &mut self,
        language: &str,
        _attrs: &HashMap<String, String>,
        source: &str,
        _index: usize,
    ) -> ProcessResult {
        if language == PANEL_TAG {
            ProcessResult::Inline(render_block(source, &self.defaults))
        } else {
            ProcessResult::PassThrough
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fence_info_language_only() {
        let (lang, attrs) = parse_fence_info("cpanel");
        assert_eq!(lang, "cpanel");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_parse_fence_info_with_attrs() {
        let (lang, attrs) = parse_fence_info("cpanel theme=dark");
        assert_eq!(lang, "cpanel");
        assert_eq!(attrs.get("theme"), Some(&"dark".to_owned()));
    }

    #[test]
    fn test_parse_fence_info_quoted_value() {
        let (_, attrs) = parse_fence_info("cpanel id='a'");
        assert_eq!(attrs.get("id"), Some(&"a".to_owned()));
    }

    #[test]
    fn test_parse_fence_info_empty() {
        let (lang, attrs) = parse_fence_info("");
        assert_eq!(lang, "");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_panel_processor_handles_tag() {
        let mut processor = PanelProcessor::new(PanelDefaults::default());
        let result = processor.process("cpanel", &HashMap::new(), "title: T\n---\nbody", 0);

        let ProcessResult::Inline(html) = result else {
            panic!("expected inline result");
        };
        assert!(html.contains("cpanel-container"));
        assert!(html.contains(">T</span>"));
    }

    #[test]
    fn test_panel_processor_passes_through_other_languages() {
        let mut processor = PanelProcessor::new(PanelDefaults::default());
        let result = processor.process("rust", &HashMap::new(), "fn main() {}", 0);
        assert_eq!(result, ProcessResult::PassThrough);
    }

    #[test]
    fn test_panel_processor_uses_defaults_snapshot() {
        let mut defaults = PanelDefaults::default();
        defaults.border_color = "#123456".to_owned();
        let mut processor = PanelProcessor::new(defaults);

        let ProcessResult::Inline(html) =
            processor.process("cpanel", &HashMap::new(), "body", 0)
        else {
            panic!("expected inline result");
        };
        assert!(html.contains("#123456"));
    }

    #[test]
    fn test_malformed_header_never_fails() {
        let mut processor = PanelProcessor::new(PanelDefaults::default());
        for source in ["", ":::", "title\n:\n:::---", "---"] {
            let result = processor.process("cpanel", &HashMap::new(), source, 0);
            assert!(matches!(result, ProcessResult::Inline(_)));
        }
    }
}
