//! Document pipeline with pluggable block processors.
//!
//! [`DocumentRenderer`] walks pulldown-cmark events for a whole document,
//! diverts fenced code blocks to registered [`BlockProcessor`]s (first
//! non-`PassThrough` result wins) and renders everything else through
//! pulldown-cmark's HTML writer. After rendering, every processor's
//! `post_process` hook runs over the final HTML.

use std::collections::HashMap;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::processor::{BlockProcessor, ProcessResult, parse_fence_info};

/// Markdown extensions enabled everywhere GFM rendering applies, for the
/// document walk and panel bodies alike.
pub(crate) const GFM_OPTIONS: Options = Options::ENABLE_TABLES
    .union(Options::ENABLE_STRIKETHROUGH)
    .union(Options::ENABLE_TASKLISTS)
    .union(Options::ENABLE_GFM);

/// Result of rendering a document.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Warnings collected from all processors.
    pub warnings: Vec<String>,
}

/// Fenced code block being buffered until its end event.
struct PendingBlock {
    info: String,
    language: String,
    attrs: HashMap<String, String>,
    source: String,
}

/// Markdown document renderer with pluggable fenced-block processors.
pub struct DocumentRenderer {
    processors: Vec<Box<dyn BlockProcessor>>,
    gfm: bool,
}

impl DocumentRenderer {
    /// Create a renderer with GFM enabled and no processors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
            gfm: true,
        }
    }

    /// Add a block processor.
    ///
    /// Processors are checked in registration order for each fenced block.
    #[must_use]
    pub fn with_processor<P: BlockProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Parser options based on the GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm { GFM_OPTIONS } else { Options::empty() }
    }

    /// Warnings from all processors.
    pub fn processor_warnings(&self) -> impl Iterator<Item = String> + '_ {
        self.processors.iter().flat_map(|p| p.warnings()).cloned()
    }

    /// Render a markdown document to HTML.
    ///
    /// Fenced blocks go through the registered processors; unhandled blocks
    /// render as regular code blocks. `post_process` runs on every
    /// processor afterwards.
    pub fn render(&mut self, markdown: &str) -> RenderResult {
        let mut events: Vec<Event<'_>> = Vec::new();
        let mut pending: Option<PendingBlock> = None;
        let mut block_index = 0;

        for event in Parser::new_ext(markdown, self.parser_options()) {
            if pending.is_some() {
                match event {
                    Event::Text(text) => {
                        if let Some(block) = pending.as_mut() {
                            block.source.push_str(&text);
                        }
                    }
                    Event::End(TagEnd::CodeBlock) => {
                        if let Some(block) = pending.take() {
                            let index = block_index;
                            block_index += 1;
                            self.emit_block(block, index, &mut events);
                        }
                    }
                    other => events.push(other),
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                    let (language, attrs) = parse_fence_info(&info);
                    pending = Some(PendingBlock {
                        info: info.into_string(),
                        language,
                        attrs,
                        source: String::new(),
                    });
                }
                other => events.push(other),
            }
        }

        let mut out = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut out, events.into_iter());

        for processor in &mut self.processors {
            processor.post_process(&mut out);
        }

        RenderResult {
            html: out,
            warnings: self.processor_warnings().collect(),
        }
    }

    /// Run the processors for a completed block and emit the result.
    fn emit_block<'a>(&mut self, block: PendingBlock, index: usize, events: &mut Vec<Event<'a>>) {
        if !block.language.is_empty() {
            for processor in &mut self.processors {
                match processor.process(&block.language, &block.attrs, &block.source, index) {
                    ProcessResult::Inline(rendered) => {
                        events.push(Event::Html(rendered.into()));
                        return;
                    }
                    ProcessResult::PassThrough => {}
                }
            }
        }

        // Unhandled: reconstruct the fenced block for the HTML writer.
        events.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(
            block.info.into(),
        ))));
        events.push(Event::Text(block.source.into()));
        events.push(Event::End(TagEnd::CodeBlock));
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}
