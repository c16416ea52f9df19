//! Named widget styles.
//!
//! Widgets ask the theme for styles by dotted name (`"menu.highlighted"`).
//! A name that is not defined falls back to its closest defined prefix
//! and then to the theme's default style.

#![allow(clippy::return_self_not_must_use)]

use std::collections::BTreeMap;

use ahash::AHashMap;
use loom_tui_core::{Color, Style, TextAttributes};
use serde::Deserialize;
use tracing::trace;

/// A widget theme.
#[derive(Debug, Clone)]
pub struct Theme {
    styles: AHashMap<String, Style>,
    default_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Creates a theme with no named styles.
    pub fn new() -> Self {
        Self::with_default(Style::new())
    }

    /// Creates an empty theme that answers every lookup with `default_style`.
    pub fn with_default(default_style: Style) -> Self {
        Self {
            styles: AHashMap::new(),
            default_style,
        }
    }

    /// Black-on-white menus with a green highlight and red mnemonics.
    pub fn classic() -> Self {
        let mut theme = Self::with_default(Style::with_colors(Color::WHITE, Color::BLACK));

        theme.set("menu", Style::with_colors(Color::BLACK, Color::WHITE));
        theme.set("menu.highlighted", Style::with_colors(Color::BLACK, Color::GREEN));
        theme.set("menu.mnemonic", Style::with_colors(Color::RED, Color::WHITE));
        theme.set(
            "menu.mnemonic.highlighted",
            Style::with_colors(Color::RED, Color::GREEN),
        );
        theme.set(
            "menu.disabled",
            Style::with_colors(Color::GRAY, Color::WHITE).bold(),
        );

        theme
    }

    /// Defines or replaces a named style.
    pub fn set(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    /// Builder form of [`Theme::set`].
    pub fn with(mut self, name: impl Into<String>, style: Style) -> Self {
        self.set(name, style);
        self
    }

    /// Resolves the style for `name`.
    pub fn color_for(&self, name: &str) -> Style {
        if let Some(style) = self.styles.get(name) {
            return *style;
        }

        let mut current = name;
        while let Some(dot) = current.rfind('.') {
            current = &current[..dot];
            if let Some(style) = self.styles.get(current) {
                return *style;
            }
        }

        trace!(name, "theme has no style; using default");
        self.default_style
    }

    /// Gets the style for `name` without fallback.
    #[inline]
    pub fn get_exact(&self, name: &str) -> Option<Style> {
        self.styles.get(name).copied()
    }

    /// Returns the default style.
    #[inline]
    pub fn default_style(&self) -> Style {
        self.default_style
    }

    /// Number of named styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if no named style is defined.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Applies configured styles on top of this theme.
    pub fn with_overrides(mut self, config: &ThemeConfig) -> Self {
        for (name, spec) in &config.styles {
            self.set(name.clone(), spec.to_style());
        }
        self
    }
}

/// Theme entries as they appear in configuration files.
///
/// ```toml
/// [theme.styles."menu.highlighted"]
/// fg = "black"
/// bg = "#00aaaa"
/// bold = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Styles keyed by theme name.
    pub styles: BTreeMap<String, StyleSpec>,
}

/// One configured style. Colors accept hex (`#RGB`, `#RRGGBB`,
/// `#RRGGBBAA`) or a color name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl StyleSpec {
    /// Converts to a [`Style`].
    pub fn to_style(&self) -> Style {
        let mut attributes = TextAttributes::empty();
        attributes.set(TextAttributes::BOLD, self.bold);
        attributes.set(TextAttributes::DIM, self.dim);
        attributes.set(TextAttributes::ITALIC, self.italic);
        attributes.set(TextAttributes::UNDERLINE, self.underline);
        attributes.set(TextAttributes::REVERSE, self.reverse);

        Style {
            fg: self.fg,
            bg: self.bg,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classic_has_menu_styles() {
        let theme = Theme::default();
        for name in [
            "menu",
            "menu.highlighted",
            "menu.mnemonic",
            "menu.mnemonic.highlighted",
            "menu.disabled",
        ] {
            assert!(theme.get_exact(name).is_some(), "missing {name}");
        }
        assert_eq!(theme.color_for("menu").bg, Some(Color::WHITE));
    }

    #[test]
    fn test_prefix_fallback() {
        let theme = Theme::new().with("menu", Style::new().fg(Color::BLUE));
        assert_eq!(theme.color_for("menu.some.thing"), Style::new().fg(Color::BLUE));
    }

    #[test]
    fn test_unknown_name_uses_default() {
        let theme = Theme::with_default(Style::new().fg(Color::YELLOW));
        assert_eq!(theme.color_for("window"), Style::new().fg(Color::YELLOW));
    }

    #[test]
    fn test_overrides_from_toml() {
        let config: ThemeConfig = toml::from_str(
            r##"
            [styles."menu.highlighted"]
            fg = "black"
            bg = "#00ffff"
            bold = true
            "##,
        )
        .unwrap();

        let theme = Theme::default().with_overrides(&config);
        let style = theme.color_for("menu.highlighted");
        assert_eq!(style.fg, Some(Color::BLACK));
        assert_eq!(style.bg, Some(Color::CYAN));
        assert!(style.is_bold());
        assert_eq!(theme.color_for("menu"), Theme::default().color_for("menu"));
    }

    #[test]
    fn test_bad_color_rejected() {
        let result: Result<ThemeConfig, _> = toml::from_str(
            r#"
            [styles.menu]
            fg = "not-a-color"
            "#,
        );
        assert!(result.is_err());
    }
}
