//! Stray panel block normalizer.
//!
//! Panel blocks written with non-standard fence lengths (or indented four
//! spaces) slip past the fenced-block interception and come out of the
//! renderer as literal `<pre><code>` blocks whose first line is the panel
//! tag. This post-processing pass finds them in the rendered HTML, strips
//! the tag line and routes the remainder through the regular panel
//! pipeline, splicing the panel in place of the code block.
//!
//! The pass is idempotent per fragment: a spliced panel no longer matches
//! the recognition predicate. It is deliberately decoupled from
//! [`PanelProcessor`](crate::processor::PanelProcessor); each path
//! guarantees at most one transformation per block on its own.

use std::collections::HashMap;

use cpanel_config::PanelDefaults;

use crate::panel::render_block;
use crate::processor::{BlockProcessor, PANEL_TAG, ProcessResult};
use crate::util::unescape_html;

/// Post-processor that rescues panel blocks the primary path missed.
pub struct StrayPanelNormalizer {
    defaults: PanelDefaults,
    warnings: Vec<String>,
}

impl StrayPanelNormalizer {
    /// Create a normalizer rendering against the given defaults snapshot.
    #[must_use]
    pub fn new(defaults: PanelDefaults) -> Self {
        Self {
            defaults,
            warnings: Vec::new(),
        }
    }
}

/// Check whether decoded code block text marks a panel block: the tag
/// followed by a newline or a space.
fn is_stray_panel(text: &str) -> bool {
    match text.strip_prefix(PANEL_TAG) {
        Some(rest) => rest.starts_with('\n') || rest.starts_with("\r\n") || rest.starts_with(' '),
        None => false,
    }
}

/// Drop the tag line, returning the block source below it.
fn strip_tag_line(text: &str) -> &str {
    text.find('\n').map_or("", |pos| &text[pos + 1..])
}

impl BlockProcessor for StrayPanelNormalizer {
    fn process(
        &mut self,
        _language: &str,
        _attrs: &HashMap<String, String>,
        _source: &str,
        _index: usize,
    ) -> ProcessResult {
        // Only post-processing; the primary path owns fenced blocks.
        ProcessResult::PassThrough
    }

    fn post_process(&mut self, html: &mut String) {
        const OPEN: &str = "<pre><code";
        const CLOSE: &str = "</code></pre>";

        let mut result = String::with_capacity(html.len());
        let mut remaining = html.as_str();

        while let Some(start) = remaining.find(OPEN) {
            // The first `>` past OPEN closes the `<code ...>` tag, not `<pre>`.
            let Some(tag_end) = remaining[start + OPEN.len()..]
                .find('>')
                .map(|i| start + OPEN.len() + i + 1)
            else {
                break;
            };
            let Some(close_start) = remaining[tag_end..].find(CLOSE).map(|i| tag_end + i) else {
                break;
            };
            let close_end = close_start + CLOSE.len();

            let text = unescape_html(&remaining[tag_end..close_start]);
            if is_stray_panel(&text) {
                tracing::debug!("normalizing stray panel block");
                result.push_str(&remaining[..start]);
                result.push_str(&render_block(strip_tag_line(&text), &self.defaults));
            } else {
                result.push_str(&remaining[..close_end]);
            }
            remaining = &remaining[close_end..];
        }

        result.push_str(remaining);
        *html = result;
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post_process(html: &str) -> String {
        let mut normalizer = StrayPanelNormalizer::new(PanelDefaults::default());
        let mut html = html.to_owned();
        normalizer.post_process(&mut html);
        html
    }

    #[test]
    fn test_recognition_predicate() {
        assert!(is_stray_panel("cpanel\ntitle: T"));
        assert!(is_stray_panel("cpanel extra\nbody"));
        assert!(is_stray_panel("cpanel\r\nbody"));
        assert!(!is_stray_panel("cpanel"));
        assert!(!is_stray_panel("cpanels\nbody"));
        assert!(!is_stray_panel("rust\nfn main() {}"));
        assert!(!is_stray_panel("  cpanel\nbody"));
    }

    #[test]
    fn test_strip_tag_line() {
        assert_eq!(strip_tag_line("cpanel\ntitle: T\n---\nbody"), "title: T\n---\nbody");
        assert_eq!(strip_tag_line("cpanel"), "");
    }

    #[test]
    fn test_stray_block_replaced_with_panel() {
        let html = "<p>Before</p><pre><code>cpanel\ntitle: Rescued\n---\nHello **bold**</code></pre><p>After</p>";
        let out = post_process(html);

        assert!(out.contains("<p>Before</p>"));
        assert!(out.contains("<p>After</p>"));
        assert!(out.contains("cpanel-container"));
        assert!(out.contains(">Rescued</span>"));
        assert!(out.contains("<strong>bold</strong>"));
        assert!(!out.contains("<pre>"));
    }

    #[test]
    fn test_block_text_starts_at_tag_not_code_element() {
        // The text handed to the predicate must begin with the panel tag
        // itself; the `<code>` open tag (attributes or not) is markup, and
        // the whole `<pre><code>...</code></pre>` wrapper is consumed.
        let html = "<pre><code>cpanel\ntitle: T\n---\nbody</code></pre>";
        let out = post_process(html);

        assert!(out.contains("cpanel-container"));
        assert!(!out.contains("<code"));
        assert!(!out.contains("</pre>"));
    }

    #[test]
    fn test_stray_block_header_is_parsed() {
        // Unlike the primary path, the stray source still carries its
        // header lines; they must resolve, not leak into the body.
        let html = "<pre><code>cpanel\nbordercolor: #ff0000\n---\nbody</code></pre>";
        let out = post_process(html);

        assert!(out.contains("#ff0000"));
        assert!(out.contains("<p>body</p>"));
        assert!(!out.contains("bordercolor: #ff0000</p>"));
    }

    #[test]
    fn test_escaped_entities_decoded_before_matching() {
        let html = "<pre><code>cpanel\ntitle: A &amp; B\n---\nuse &lt;b&gt;
</code></pre>";
        let out = post_process(html);

        assert!(out.contains("A &amp; B</span>"));
        assert!(out.contains("cpanel-container"));
    }

    #[test]
    fn test_language_classed_code_block_matches() {
        let html = r#"<pre><code class="language-text">cpanel
title: T
---
body</code></pre>"#;
        let out = post_process(html);
        assert!(out.contains("cpanel-container"));
    }

    #[test]
    fn test_unrelated_code_blocks_untouched() {
        let html = r#"<pre><code class="language-rust">fn main() {}</code></pre>"#;
        assert_eq!(post_process(html), html);
    }

    #[test]
    fn test_prefix_must_be_followed_by_break_or_space() {
        let html = "<pre><code>cpanel-like content</code></pre>";
        assert_eq!(post_process(html), html);
    }

    #[test]
    fn test_idempotent_per_fragment() {
        let html = "<pre><code>cpanel\ntitle: T\n---\nbody</code></pre>";
        let once = post_process(html);
        let twice = post_process(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_multiple_stray_blocks() {
        let html = "<pre><code>cpanel\ntitle: A\n---\none</code></pre><pre><code>cpanel\ntitle: B\n---\ntwo</code></pre>";
        let out = post_process(html);

        assert!(out.contains(">A</span>"));
        assert!(out.contains(">B</span>"));
        assert_eq!(out.matches("cpanel-container").count(), 2);
    }

    #[test]
    fn test_malformed_html_passes_through() {
        let html = "<pre><code>cpanel\nno closing tag";
        assert_eq!(post_process(html), html);
    }

    #[test]
    fn test_process_is_passthrough() {
        let mut normalizer = StrayPanelNormalizer::new(PanelDefaults::default());
        let result = normalizer.process("cpanel", &HashMap::new(), "x", 0);
        assert_eq!(result, ProcessResult::PassThrough);
    }
}
