//! Screen cell representation.

use loom_tui_core::{Color, Style, TextAttributes};

/// A single cell of the screen: one glyph plus its attributes.
///
/// ```
/// use loom_tui_buffer::Cell;
/// use loom_tui_core::{Color, TextAttributes};
///
/// let cell = Cell::new('A')
///     .with_fg(Color::WHITE)
///     .with_bg(Color::BLUE)
///     .with_attributes(TextAttributes::BOLD);
/// assert_eq!(cell.character, 'A');
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// The glyph displayed in this cell.
    pub character: char,

    /// Foreground (text) color.
    pub fg: Color,

    /// Background color.
    pub bg: Color,

    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ')
    }
}

impl Cell {
    /// Creates a new cell with the default colors.
    #[inline]
    pub const fn new(character: char) -> Self {
        Self {
            character,
            fg: Color::WHITE,
            bg: Color::TRANSPARENT,
            attributes: TextAttributes::empty(),
        }
    }

    /// Creates a cell with character and style.
    #[inline]
    pub fn with_style(character: char, style: Style) -> Self {
        let mut cell = Self::new(character);
        cell.apply_style(style);
        cell
    }

    /// Sets the character.
    #[inline]
    pub const fn with_char(self, character: char) -> Self {
        Self { character, ..self }
    }

    /// Sets the foreground color.
    #[inline]
    pub const fn with_fg(self, fg: Color) -> Self {
        Self { fg, ..self }
    }

    /// Sets the background color.
    #[inline]
    pub const fn with_bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }

    /// Sets the text attributes.
    #[inline]
    pub const fn with_attributes(self, attributes: TextAttributes) -> Self {
        Self { attributes, ..self }
    }

    /// Returns the style of this cell.
    #[inline]
    pub fn style(&self) -> Style {
        Style {
            fg: Some(self.fg),
            bg: Some(self.bg),
            attributes: self.attributes,
        }
    }

    /// Applies a style to this cell.
    ///
    /// Colors left unset in `style` keep the cell's current colors;
    /// attributes are replaced.
    #[inline]
    pub fn apply_style(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = fg;
        }
        if let Some(bg) = style.bg {
            self.bg = bg;
        }
        self.attributes = style.attributes;
    }

    /// Returns true if the two cells render identically.
    pub fn same_style(&self, other: &Self) -> bool {
        self.fg == other.fg && self.bg == other.bg && self.attributes == other.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.character, ' ');
        assert!(cell.bg.is_transparent());
    }

    #[test]
    fn test_apply_style_keeps_unset_colors() {
        let mut cell = Cell::new('x').with_bg(Color::BLUE);
        cell.apply_style(Style::new().fg(Color::RED).bold());
        assert_eq!(cell.fg, Color::RED);
        assert_eq!(cell.bg, Color::BLUE);
        assert!(cell.attributes.is_bold());
    }

    #[test]
    fn test_same_style() {
        let a = Cell::with_style('a', Style::with_colors(Color::BLACK, Color::WHITE));
        let b = a.with_char('b');
        assert!(a.same_style(&b));
        assert!(!a.same_style(&b.with_fg(Color::RED)));
    }
}
