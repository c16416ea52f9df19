//! Mouse input types.

use crate::keyboard::KeyModifiers;
use std::fmt;

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Left mouse button (button 1).
    #[default]
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "left"),
            MouseButton::Right => write!(f, "right"),
            MouseButton::Middle => write!(f, "middle"),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        match btn {
            crossterm::event::MouseButton::Left => MouseButton::Left,
            crossterm::event::MouseButton::Right => MouseButton::Right,
            crossterm::event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

/// The kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// A button was pressed down.
    Down(MouseButton),
    /// A button was released.
    Up(MouseButton),
    /// The mouse was dragged while a button was held.
    Drag(MouseButton),
    /// The mouse was moved without any buttons pressed.
    Moved,
    /// The scroll wheel was scrolled down.
    ScrollDown,
    /// The scroll wheel was scrolled up.
    ScrollUp,
    /// Horizontal scroll left.
    ScrollLeft,
    /// Horizontal scroll right.
    ScrollRight,
}

impl MouseEventKind {
    /// Returns the button associated with this event, if any.
    #[must_use]
    pub fn button(&self) -> Option<MouseButton> {
        match self {
            MouseEventKind::Down(btn) | MouseEventKind::Up(btn) | MouseEventKind::Drag(btn) => {
                Some(*btn)
            }
            _ => None,
        }
    }
}

impl fmt::Display for MouseEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseEventKind::Down(btn) => write!(f, "down({btn})"),
            MouseEventKind::Up(btn) => write!(f, "up({btn})"),
            MouseEventKind::Drag(btn) => write!(f, "drag({btn})"),
            MouseEventKind::Moved => write!(f, "moved"),
            MouseEventKind::ScrollDown => write!(f, "scroll_down"),
            MouseEventKind::ScrollUp => write!(f, "scroll_up"),
            MouseEventKind::ScrollLeft => write!(f, "scroll_left"),
            MouseEventKind::ScrollRight => write!(f, "scroll_right"),
        }
    }
}

impl From<crossterm::event::MouseEventKind> for MouseEventKind {
    fn from(kind: crossterm::event::MouseEventKind) -> Self {
        match kind {
            crossterm::event::MouseEventKind::Down(btn) => MouseEventKind::Down(btn.into()),
            crossterm::event::MouseEventKind::Up(btn) => MouseEventKind::Up(btn.into()),
            crossterm::event::MouseEventKind::Drag(btn) => MouseEventKind::Drag(btn.into()),
            crossterm::event::MouseEventKind::Moved => MouseEventKind::Moved,
            crossterm::event::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
            crossterm::event::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
            crossterm::event::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
            crossterm::event::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
        }
    }
}

/// A complete mouse event.
///
/// `column`/`row` are in the receiving widget's local frame and may be
/// negative. `absolute_column`/`absolute_row` keep the screen position the
/// backend reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// The kind of mouse event.
    pub kind: MouseEventKind,
    /// Local column.
    pub column: i32,
    /// Local row.
    pub row: i32,
    /// Screen column.
    pub absolute_column: u16,
    /// Screen row.
    pub absolute_row: u16,
    /// Active keyboard modifiers.
    pub modifiers: KeyModifiers,
}

impl MouseEvent {
    /// Creates a mouse event at a screen position; local equals absolute.
    #[must_use]
    pub fn new(kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) -> Self {
        Self {
            kind,
            column: column as i32,
            row: row as i32,
            absolute_column: column,
            absolute_row: row,
            modifiers,
        }
    }

    /// Creates a button down event.
    #[must_use]
    pub fn down(button: MouseButton, column: u16, row: u16) -> Self {
        Self::new(MouseEventKind::Down(button), column, row, KeyModifiers::NONE)
    }

    /// Creates a button up event.
    #[must_use]
    pub fn up(button: MouseButton, column: u16, row: u16) -> Self {
        Self::new(MouseEventKind::Up(button), column, row, KeyModifiers::NONE)
    }

    /// Returns a copy whose local position is relative to `(origin_x, origin_y)`,
    /// given in screen coordinates.
    ///
    /// ```
    /// use loom_tui_input::{MouseButton, MouseEvent};
    ///
    /// let event = MouseEvent::up(MouseButton::Left, 9, 4).to_local(10, 4);
    /// assert_eq!((event.column, event.row), (-1, 0));
    /// assert_eq!(event.absolute_column, 9);
    /// ```
    #[must_use]
    pub fn to_local(&self, origin_x: i32, origin_y: i32) -> Self {
        Self {
            column: self.absolute_column as i32 - origin_x,
            row: self.absolute_row as i32 - origin_y,
            ..self.clone()
        }
    }

    /// Returns true for a release of the primary button.
    #[must_use]
    pub fn is_button1_release(&self) -> bool {
        self.kind == MouseEventKind::Up(MouseButton::Left)
    }
}

impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) [screen {}, {}]",
            self.kind, self.column, self.row, self.absolute_column, self.absolute_row
        )
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(event: crossterm::event::MouseEvent) -> Self {
        Self::new(
            event.kind.into(),
            event.column,
            event.row,
            event.modifiers.into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button1_release() {
        assert!(MouseEvent::up(MouseButton::Left, 0, 0).is_button1_release());
        assert!(!MouseEvent::up(MouseButton::Right, 0, 0).is_button1_release());
        assert!(!MouseEvent::down(MouseButton::Left, 0, 0).is_button1_release());
    }

    #[test]
    fn test_to_local_is_relative_to_screen_position() {
        let event = MouseEvent::up(MouseButton::Left, 15, 3);
        let nested = event.to_local(10, 3).to_local(12, 2);
        assert_eq!((nested.column, nested.row), (3, 1));
    }

    #[test]
    fn test_kind_button() {
        assert_eq!(
            MouseEventKind::Drag(MouseButton::Middle).button(),
            Some(MouseButton::Middle)
        );
        assert_eq!(MouseEventKind::ScrollUp.button(), None);
    }

    #[test]
    fn test_from_crossterm() {
        let ct = crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Up(crossterm::event::MouseButton::Left),
            column: 7,
            row: 2,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        let event = MouseEvent::from(ct);
        assert!(event.is_button1_release());
        assert_eq!((event.column, event.row), (7, 2));
    }
}
