//! Panel stylesheet and client-side toggle script.
//!
//! The built-in stylesheet mirrors the inline styles with hover and
//! spacing rules that cannot be expressed inline. An external stylesheet
//! file, when readable, replaces the built-in one verbatim; a read failure
//! is logged and silently falls back.

use std::borrow::Cow;
use std::path::Path;

/// Built-in panel stylesheet.
pub const DEFAULT_STYLESHEET: &str = "\
.cpanel-container {
    margin: 16px 0;
    font-family: var(--font-text);
}

.cpanel-header {
    transition: background-color 0.2s ease;
}

.cpanel-header:hover {
    filter: brightness(0.95);
}

.cpanel-icon {
    display: inline-flex;
    align-items: center;
    font-size: 16px;
}

.cpanel-title {
    color: var(--text-normal);
}

.cpanel-collapse-indicator {
    font-size: 12px;
    color: var(--text-muted);
}

.cpanel-content {
    color: var(--text-normal);
}

.cpanel-content > *:first-child {
    margin-top: 0;
}

.cpanel-content > *:last-child {
    margin-bottom: 0;
}

.lucide-icon {
    width: 16px;
    height: 16px;
}
";

/// Delegated click handler implementing the collapse state machine.
///
/// Mirrors the `PanelState` projections: content display, indicator
/// rotation and header bottom border all flip together, reading the
/// current state from the live display value.
pub const TOGGLE_SCRIPT: &str = r#"document.addEventListener('click', function (event) {
    var header = event.target.closest('.cpanel-header[data-collapsible="true"]');
    if (!header) return;
    var content = header.parentElement.querySelector('.cpanel-content');
    var indicator = header.querySelector('.cpanel-collapse-indicator');
    if (!content) return;
    var collapsed = content.style.display === 'none';
    if (collapsed) {
        content.style.display = 'block';
        if (indicator) indicator.style.transform = 'rotate(0deg)';
        header.style.borderBottom = '1px solid ' + header.dataset.borderColor;
    } else {
        content.style.display = 'none';
        if (indicator) indicator.style.transform = 'rotate(-90deg)';
        header.style.borderBottom = 'none';
    }
});
"#;

/// Resolve the active stylesheet.
///
/// When `path` is given and readable, its full text replaces the built-in
/// stylesheet verbatim. Any read failure falls back to the built-in styles
/// with only a debug log; it is never an error.
#[must_use]
pub fn stylesheet(path: Option<&Path>) -> Cow<'static, str> {
    if let Some(path) = path {
        match std::fs::read_to_string(path) {
            Ok(css) => {
                tracing::debug!(path = %path.display(), "loaded external stylesheet");
                return Cow::Owned(css);
            }
            Err(err) => {
                tracing::debug!(
                    path = %path.display(),
                    %err,
                    "external stylesheet not readable, using built-in styles"
                );
            }
        }
    }
    Cow::Borrowed(DEFAULT_STYLESHEET)
}
