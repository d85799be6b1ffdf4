//! Panel HTML construction.
//!
//! Builds the container/header/content structure for one panel from a
//! resolved [`PanelStyle`] and a markdown body. Collapse state is an
//! explicit [`PanelState`] with pure style projections; the initial render
//! and the client-side toggle script are both expressed over those
//! projections, so a toggle round-trip restores the exact initial values.

use std::fmt::Write;

use cpanel_config::PanelDefaults;
use pulldown_cmark::{Parser, html};

use crate::header::split_header;
use crate::options::PanelStyle;
use crate::util::escape_html;

/// Collapse state of a panel instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// Content visible, indicator pointing down.
    Expanded,
    /// Content hidden, indicator rotated, header bottom border absent.
    Collapsed,
}

impl PanelState {
    /// Initial state from a resolved `collapsed` flag.
    #[must_use]
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed { Self::Collapsed } else { Self::Expanded }
    }

    /// State after one header click.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// CSS `display` value for the content area.
    #[must_use]
    pub fn content_display(self) -> &'static str {
        match self {
            Self::Expanded => "block",
            Self::Collapsed => "none",
        }
    }

    /// CSS `transform` value for the collapse indicator.
    #[must_use]
    pub fn indicator_transform(self) -> &'static str {
        match self {
            Self::Expanded => "rotate(0deg)",
            Self::Collapsed => "rotate(-90deg)",
        }
    }

    /// CSS `border-bottom` value for the header.
    ///
    /// The bottom border is absent exactly when the panel is collapsed.
    #[must_use]
    pub fn header_border(self, border_color: &str) -> String {
        match self {
            Self::Expanded => format!("1px solid {border_color}"),
            Self::Collapsed => "none".to_owned(),
        }
    }
}

/// Pictographic ranges treated as literal icon glyphs.
const PICTOGRAPHIC_RANGES: [(char, char); 6] = [
    ('\u{1F300}', '\u{1F5FF}'),
    ('\u{1F900}', '\u{1F9FF}'),
    ('\u{1F600}', '\u{1F64F}'),
    ('\u{1F680}', '\u{1F6FF}'),
    ('\u{2600}', '\u{26FF}'),
    ('\u{2700}', '\u{27BF}'),
];

/// Decide whether an icon value renders as literal text.
///
/// Short values (two characters or fewer) and values containing a
/// pictographic character are emoji/symbols; anything else is treated as a
/// referenced vector icon identifier.
#[must_use]
pub fn is_literal_icon(icon: &str) -> bool {
    icon.chars().count() <= 2
        || icon.chars().any(|c| {
            PICTOGRAPHIC_RANGES
                .iter()
                .any(|(lo, hi)| (*lo..=*hi).contains(&c))
        })
}

/// Parse and render one panel block: header split, style resolution,
/// HTML construction.
#[must_use]
pub fn render_block(source: &str, defaults: &PanelDefaults) -> String {
    let (overrides, content) = split_header(source);
    let style = PanelStyle::resolve(&overrides, defaults);
    render_panel(&style, &content)
}

/// Render one panel from a resolved style and a markdown body.
///
/// The body is rendered with GFM options through pulldown-cmark; panel
/// blocks nested inside the body are not processed.
#[must_use]
pub fn render_panel(style: &PanelStyle, content: &str) -> String {
    let state = PanelState::from_collapsed(style.collapsed);
    let mut out = String::with_capacity(content.len() + 1024);

    let border_color = escape_html(&style.border_color);
    let header_text_color = escape_html(&style.header_text_color);
    let header_height = escape_html(&style.header_height);

    // Container
    write!(
        out,
        r#"<div class="cpanel-container" style="border: {} solid {border_color};border-radius: {};background: {};overflow: hidden">"#,
        escape_html(&style.border_width),
        escape_html(&style.border_radius),
        escape_html(&style.background),
    )
    .unwrap();

    // Header
    let interaction = if style.collapsible {
        ";cursor: pointer;user-select: none"
    } else {
        ""
    };
    write!(
        out,
        r#"<div class="cpanel-header" data-collapsible="{}" data-border-color="{border_color}" style="background: {};color: {header_text_color};height: {header_height};min-height: {header_height};padding: 0 16px;border-bottom: {};display: flex;align-items: center;gap: 8px{interaction}">"#,
        style.collapsible,
        escape_html(&style.header_background),
        state.header_border(&border_color),
    )
    .unwrap();

    if let Some(icon) = &style.icon {
        if is_literal_icon(icon) {
            write!(
                out,
                r#"<span class="cpanel-icon">{}</span>"#,
                escape_html(icon)
            )
            .unwrap();
        } else {
            write!(
                out,
                r##"<span class="cpanel-icon"><svg class="lucide-icon"><use href="#{}"></use></svg></span>"##,
                escape_html(icon)
            )
            .unwrap();
        }
    }

    write!(
        out,
        r#"<span class="cpanel-title" style="font-weight: 600;font-size: 16px;color: {header_text_color}">{}</span>"#,
        escape_html(&style.title)
    )
    .unwrap();

    if style.collapsible {
        write!(
            out,
            r#"<span class="cpanel-collapse-indicator" style="margin-left: auto;transform: {};transition: transform 0.2s ease;color: {header_text_color}">▼</span>"#,
            state.indicator_transform(),
        )
        .unwrap();
    }

    out.push_str("</div>");

    // Content
    write!(
        out,
        r#"<div class="cpanel-content" style="padding: 16px;display: {}">"#,
        state.content_display(),
    )
    .unwrap();
    if !content.is_empty() {
        let parser = Parser::new_ext(content, crate::pipeline::GFM_OPTIONS);
        html::push_html(&mut out, parser);
    }
    out.push_str("</div></div>");

    out
}
