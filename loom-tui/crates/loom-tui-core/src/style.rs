//! Cell attributes: colors plus text decorations.
//!
//! - [`TextAttributes`]: bitflags for decorations (bold, reverse, ...)
//! - [`Style`]: foreground, background and attributes for one cell
//!
//! ```
//! use loom_tui_core::style::{Style, TextAttributes};
//! use loom_tui_core::color::Color;
//!
//! let disabled = Style::with_colors(Color::BLACK, Color::WHITE).bold();
//! assert!(disabled.attributes.contains(TextAttributes::BOLD));
//! ```

use crate::color::Color;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Text decoration attributes as a compact bitfield.
    ///
    /// ```
    /// use loom_tui_core::style::TextAttributes;
    ///
    /// let attrs = TextAttributes::BOLD | TextAttributes::UNDERLINE;
    /// assert!(attrs.contains(TextAttributes::BOLD));
    /// assert!(!attrs.contains(TextAttributes::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextAttributes: u8 {
        /// Bold/bright text.
        const BOLD          = 0b0000_0001;
        /// Dim/faint text.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Blinking text.
        const BLINK         = 0b0001_0000;
        /// Reverse video.
        const REVERSE       = 0b0010_0000;
    }
}

impl TextAttributes {
    /// No attributes set.
    pub const NONE: Self = Self::empty();

    /// Returns `true` if bold is set.
    #[inline]
    pub fn is_bold(self) -> bool {
        self.contains(Self::BOLD)
    }
}

impl fmt::Display for TextAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = [
            (Self::BOLD, "bold"),
            (Self::DIM, "dim"),
            (Self::ITALIC, "italic"),
            (Self::UNDERLINE, "underline"),
            (Self::BLINK, "blink"),
            (Self::REVERSE, "reverse"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect();
        write!(f, "{}", names.join("+"))
    }
}

/// Complete styling information for a cell.
///
/// `None` colors mean "inherit what the cell already has".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text decoration attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Creates a new empty style with no colors and no attributes.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Creates a style with the given foreground and background colors.
    #[inline]
    pub const fn with_colors(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
            attributes: TextAttributes::empty(),
        }
    }

    /// Returns `true` if this style has no colors and no attributes set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Sets the foreground color.
    #[inline]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    #[inline]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Adds the given attributes.
    #[inline]
    pub const fn add_attributes(mut self, attrs: TextAttributes) -> Self {
        self.attributes = self.attributes.union(attrs);
        self
    }

    /// Adds bold.
    #[inline]
    pub const fn bold(self) -> Self {
        self.add_attributes(TextAttributes::BOLD)
    }

    /// Adds dim.
    #[inline]
    pub const fn dim(self) -> Self {
        self.add_attributes(TextAttributes::DIM)
    }

    /// Adds italic.
    #[inline]
    pub const fn italic(self) -> Self {
        self.add_attributes(TextAttributes::ITALIC)
    }

    /// Adds underline.
    #[inline]
    pub const fn underline(self) -> Self {
        self.add_attributes(TextAttributes::UNDERLINE)
    }

    /// Adds reverse video.
    #[inline]
    pub const fn reverse(self) -> Self {
        self.add_attributes(TextAttributes::REVERSE)
    }

    /// Returns `true` if bold is set.
    #[inline]
    pub const fn is_bold(&self) -> bool {
        self.attributes.contains(TextAttributes::BOLD)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = |c: Option<Color>| c.map_or_else(|| "-".to_string(), |c| c.to_hex());
        write!(
            f,
            "{} on {} ({})",
            color(self.fg),
            color(self.bg),
            self.attributes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let style = Style::new().fg(Color::RED).bg(Color::BLUE).bold().underline();
        assert_eq!(style.fg, Some(Color::RED));
        assert_eq!(style.bg, Some(Color::BLUE));
        assert!(style.attributes.contains(TextAttributes::BOLD | TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_empty() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().dim().is_empty());
    }

    #[test]
    fn test_attribute_display() {
        assert_eq!(TextAttributes::NONE.to_string(), "none");
        assert_eq!(
            (TextAttributes::BOLD | TextAttributes::REVERSE).to_string(),
            "bold+reverse"
        );
    }
}
