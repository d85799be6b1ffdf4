//! Panel option keys and style resolution.
//!
//! Block headers use loosely spelled keys (`bordercolor` / `borderColor`);
//! these resolve to one canonical [`PanelKey`] at parse time through an
//! explicit alias table. [`PanelStyle::resolve`] then merges block values
//! over the process-wide [`PanelDefaults`] into a fully typed record, the
//! only form the renderer consumes.

use std::collections::HashMap;

use cpanel_config::PanelDefaults;

/// Canonical option keys recognized in a panel header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKey {
    /// Header title text.
    Title,
    /// Header icon (literal glyph or icon identifier).
    Icon,
    /// Container border color.
    BorderColor,
    /// Container border width.
    BorderWidth,
    /// Container corner radius.
    BorderRadius,
    /// Content background.
    Background,
    /// Header background.
    HeaderBackground,
    /// Header text color.
    HeaderTextColor,
    /// Header height.
    HeaderHeight,
    /// Whether the header responds to clicks.
    Collapsible,
    /// Whether the panel starts collapsed.
    Collapsed,
}

impl PanelKey {
    /// Resolve a header key spelling to its canonical option.
    ///
    /// Returns `None` for unrecognized keys, which are silently dropped.
    #[must_use]
    pub fn from_alias(key: &str) -> Option<Self> {
        match key {
            "title" => Some(Self::Title),
            "icon" => Some(Self::Icon),
            "bordercolor" | "borderColor" => Some(Self::BorderColor),
            "borderwidth" | "borderWidth" => Some(Self::BorderWidth),
            "borderradius" | "borderRadius" => Some(Self::BorderRadius),
            "background" => Some(Self::Background),
            "headerbackground" => Some(Self::HeaderBackground),
            "headertextcolor" | "headerTextColor" => Some(Self::HeaderTextColor),
            "headerheight" | "headerHeight" => Some(Self::HeaderHeight),
            "collapsible" => Some(Self::Collapsible),
            "collapsed" => Some(Self::Collapsed),
            _ => None,
        }
    }
}

/// Raw option values extracted from one block header.
///
/// Values are kept as strings; boolean coercion happens during
/// [`PanelStyle::resolve`]. The first value seen per canonical key wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelOverrides {
    values: HashMap<PanelKey, String>,
}

impl PanelOverrides {
    /// Record a value unless the canonical key was already set.
    pub fn insert_first(&mut self, key: PanelKey, value: String) {
        self.values.entry(key).or_insert(value);
    }

    /// Get the raw string value for a key.
    #[must_use]
    pub fn get(&self, key: PanelKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Check whether any option was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Fully resolved styling for one panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelStyle {
    /// Header title text.
    pub title: String,
    /// Header icon, when one was supplied.
    pub icon: Option<String>,
    /// Container border color.
    pub border_color: String,
    /// Container border width.
    pub border_width: String,
    /// Container corner radius.
    pub border_radius: String,
    /// Content background.
    pub background: String,
    /// Header background.
    pub header_background: String,
    /// Header text color.
    pub header_text_color: String,
    /// Header height.
    pub header_height: String,
    /// Whether the header responds to clicks.
    pub collapsible: bool,
    /// Whether the panel starts collapsed.
    pub collapsed: bool,
}

/// Fallback title when a block supplies none.
const DEFAULT_TITLE: &str = "Custom Panel";

impl PanelStyle {
    /// Merge block overrides over the global defaults.
    ///
    /// String options fall back to the default when absent or empty.
    /// Boolean options compare the raw value literally against `"true"`:
    /// a present key with any other value resolves to `false`, while an
    /// absent key takes the default.
    #[must_use]
    pub fn resolve(overrides: &PanelOverrides, defaults: &PanelDefaults) -> Self {
        let string_option = |key: PanelKey, default: &str| {
            match overrides.get(key) {
                Some(value) if !value.is_empty() => value.to_owned(),
                _ => default.to_owned(),
            }
        };
        let bool_option = |key: PanelKey, default: bool| {
            overrides.get(key).map_or(default, |value| value == "true")
        };

        Self {
            title: string_option(PanelKey::Title, DEFAULT_TITLE),
            icon: overrides
                .get(PanelKey::Icon)
                .filter(|icon| !icon.is_empty())
                .map(str::to_owned),
            border_color: string_option(PanelKey::BorderColor, &defaults.border_color),
            border_width: string_option(PanelKey::BorderWidth, &defaults.border_width),
            border_radius: string_option(PanelKey::BorderRadius, &defaults.border_radius),
            background: string_option(PanelKey::Background, &defaults.background),
            header_background: string_option(
                PanelKey::HeaderBackground,
                &defaults.header_background,
            ),
            header_text_color: string_option(
                PanelKey::HeaderTextColor,
                &defaults.header_text_color,
            ),
            header_height: string_option(PanelKey::HeaderHeight, &defaults.header_height),
            collapsible: bool_option(PanelKey::Collapsible, defaults.collapsible),
            collapsed: bool_option(PanelKey::Collapsed, defaults.collapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alias_table_lowercase_and_camel() {
        assert_eq!(
            PanelKey::from_alias("bordercolor"),
            Some(PanelKey::BorderColor)
        );
        assert_eq!(
            PanelKey::from_alias("borderColor"),
            Some(PanelKey::BorderColor)
        );
        assert_eq!(
            PanelKey::from_alias("headertextcolor"),
            Some(PanelKey::HeaderTextColor)
        );
        assert_eq!(
            PanelKey::from_alias("headerTextColor"),
            Some(PanelKey::HeaderTextColor)
        );
        assert_eq!(
            PanelKey::from_alias("headerheight"),
            Some(PanelKey::HeaderHeight)
        );
        assert_eq!(PanelKey::from_alias("collapsible"), Some(PanelKey::Collapsible));
    }

    #[test]
    fn test_unknown_alias_is_dropped() {
        assert_eq!(PanelKey::from_alias("BORDERCOLOR"), None);
        assert_eq!(PanelKey::from_alias("shadow"), None);
        assert_eq!(PanelKey::from_alias(""), None);
    }

    #[test]
    fn test_first_value_per_canonical_key_wins() {
        let mut overrides = PanelOverrides::default();
        overrides.insert_first(PanelKey::BorderColor, "red".to_owned());
        overrides.insert_first(PanelKey::BorderColor, "blue".to_owned());
        assert_eq!(overrides.get(PanelKey::BorderColor), Some("red"));
    }

    #[test]
    fn test_resolve_all_defaults() {
        let style = PanelStyle::resolve(&PanelOverrides::default(), &PanelDefaults::default());
        assert_eq!(style.title, "Custom Panel");
        assert_eq!(style.icon, None);
        assert_eq!(style.border_color, "#cccccc");
        assert_eq!(style.border_width, "1px");
        assert_eq!(style.header_height, "48px");
        assert!(style.collapsible);
        assert!(!style.collapsed);
    }

    #[test]
    fn test_resolve_block_value_over_default() {
        let mut overrides = PanelOverrides::default();
        overrides.insert_first(PanelKey::BorderColor, "#00ff00".to_owned());
        overrides.insert_first(PanelKey::Title, "Notes".to_owned());

        let style = PanelStyle::resolve(&overrides, &PanelDefaults::default());

        assert_eq!(style.border_color, "#00ff00");
        assert_eq!(style.title, "Notes");
        assert_eq!(style.border_width, "1px");
    }

    #[test]
    fn test_resolve_empty_string_falls_back() {
        let mut overrides = PanelOverrides::default();
        overrides.insert_first(PanelKey::Title, String::new());
        overrides.insert_first(PanelKey::Icon, String::new());

        let style = PanelStyle::resolve(&overrides, &PanelDefaults::default());

        assert_eq!(style.title, "Custom Panel");
        assert_eq!(style.icon, None);
    }

    #[test]
    fn test_resolve_boolean_literal_true_match() {
        let defaults = PanelDefaults::default();

        let mut overrides = PanelOverrides::default();
        overrides.insert_first(PanelKey::Collapsed, "true".to_owned());
        assert!(PanelStyle::resolve(&overrides, &defaults).collapsed);

        // Any other string, including "True" or "yes", resolves to false
        let mut overrides = PanelOverrides::default();
        overrides.insert_first(PanelKey::Collapsible, "True".to_owned());
        assert!(!PanelStyle::resolve(&overrides, &defaults).collapsible);

        let mut overrides = PanelOverrides::default();
        overrides.insert_first(PanelKey::Collapsible, "yes".to_owned());
        assert!(!PanelStyle::resolve(&overrides, &defaults).collapsible);
    }

    #[test]
    fn test_resolve_absent_boolean_takes_default() {
        let mut defaults = PanelDefaults::default();
        defaults.collapsible = false;
        defaults.collapsed = true;

        let style = PanelStyle::resolve(&PanelOverrides::default(), &defaults);

        assert!(!style.collapsible);
        assert!(style.collapsed);
    }
}
