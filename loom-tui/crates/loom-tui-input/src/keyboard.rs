//! Keyboard input types.
//!
//! A [`KeyEvent`] doubles as the description of a global accelerator key;
//! its [`Display`](std::fmt::Display) form is the text menus show next to
//! an item (`Alt-X`, `Ctrl-S`, `F10`).

use bitflags::bitflags;
use std::fmt;

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed down.
    #[default]
    Press,
    /// Key is being held down and repeating.
    Repeat,
    /// Key was released.
    Release,
}

impl From<crossterm::event::KeyEventKind> for KeyEventKind {
    fn from(kind: crossterm::event::KeyEventKind) -> Self {
        match kind {
            crossterm::event::KeyEventKind::Press => KeyEventKind::Press,
            crossterm::event::KeyEventKind::Repeat => KeyEventKind::Repeat,
            crossterm::event::KeyEventKind::Release => KeyEventKind::Release,
        }
    }
}

/// A key on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Shift+Tab (backtab).
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Function key F1-F24.
    F(u8),
    /// A regular character key.
    Char(char),
    /// Null character, also used for keys with no mapping.
    Null,
    /// Escape key.
    Esc,
}

impl KeyCode {
    /// Returns the label used in accelerator text.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "BackTab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Insert => "Ins".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_uppercase().collect(),
            KeyCode::Null => "Null".to_string(),
            KeyCode::Esc => "Esc".to_string(),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<crossterm::event::KeyCode> for KeyCode {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode as CT;
        match code {
            CT::Backspace => KeyCode::Backspace,
            CT::Enter => KeyCode::Enter,
            CT::Left => KeyCode::Left,
            CT::Right => KeyCode::Right,
            CT::Up => KeyCode::Up,
            CT::Down => KeyCode::Down,
            CT::Home => KeyCode::Home,
            CT::End => KeyCode::End,
            CT::PageUp => KeyCode::PageUp,
            CT::PageDown => KeyCode::PageDown,
            CT::Tab => KeyCode::Tab,
            CT::BackTab => KeyCode::BackTab,
            CT::Delete => KeyCode::Delete,
            CT::Insert => KeyCode::Insert,
            CT::F(n) => KeyCode::F(n),
            CT::Char(c) => KeyCode::Char(c),
            CT::Esc => KeyCode::Esc,
            CT::Null
            | CT::CapsLock
            | CT::ScrollLock
            | CT::NumLock
            | CT::PrintScreen
            | CT::Pause
            | CT::Menu
            | CT::KeypadBegin
            | CT::Media(_)
            | CT::Modifier(_) => KeyCode::Null,
        }
    }
}

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// No modifiers pressed.
        const NONE = 0b0000_0000;
        /// Shift modifier.
        const SHIFT = 0b0000_0001;
        /// Control modifier.
        const CONTROL = 0b0000_0010;
        /// Alt/Option modifier.
        const ALT = 0b0000_0100;
    }
}

impl From<crossterm::event::KeyModifiers> for KeyModifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        let mut result = KeyModifiers::NONE;
        if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
            result |= KeyModifiers::SHIFT;
        }
        if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
            result |= KeyModifiers::CONTROL;
        }
        if mods.contains(crossterm::event::KeyModifiers::ALT) {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// A complete keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Active modifiers.
    pub modifiers: KeyModifiers,
    /// Press, repeat or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Creates a key press event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            kind: KeyEventKind::Press,
        }
    }

    /// Creates a key event of the given kind.
    #[must_use]
    pub fn with_kind(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Self {
        Self {
            code,
            modifiers,
            kind,
        }
    }

    /// Creates an unmodified character press.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    /// Creates an Alt+character press.
    #[must_use]
    pub fn alt(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    /// Creates a Ctrl+character press.
    #[must_use]
    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Returns true if this is a key press event.
    #[must_use]
    pub fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }

    /// Returns true for the key that activates the focused item:
    /// an unmodified Enter press.
    #[must_use]
    pub fn is_activate(&self) -> bool {
        self.is_press() && self.code == KeyCode::Enter && self.modifiers.is_empty()
    }

    /// Checks whether `other` is the same key combination, ignoring the
    /// event kind and the case of character keys.
    #[must_use]
    pub fn same_combination(&self, other: &KeyEvent) -> bool {
        let strip = KeyModifiers::SHIFT;
        match (self.code, other.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.eq_ignore_ascii_case(&b) && self.modifiers - strip == other.modifiers - strip
            }
            _ => self.code == other.code && self.modifiers == other.modifiers,
        }
    }

    /// Returns the accelerator text for this key, e.g. `Alt-X`.
    ///
    /// Character keys are shown upper-cased; `Shift-` appears only when the
    /// modifier is set explicitly.
    #[must_use]
    pub fn accelerator_text(&self) -> String {
        let mut text = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            text.push_str("Ctrl-");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            text.push_str("Alt-");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            text.push_str("Shift-");
        }
        text.push_str(&self.code.label());
        text
    }
}

impl Default for KeyEvent {
    fn default() -> Self {
        Self::new(KeyCode::Null, KeyModifiers::NONE)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.accelerator_text())
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self {
            code: event.code.into(),
            modifiers: event.modifiers.into(),
            kind: event.kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerator_text() {
        assert_eq!(KeyEvent::alt('x').to_string(), "Alt-X");
        assert_eq!(KeyEvent::ctrl('s').to_string(), "Ctrl-S");
        assert_eq!(KeyEvent::new(KeyCode::F(10), KeyModifiers::NONE).to_string(), "F10");
        assert_eq!(
            KeyEvent::new(KeyCode::F(3), KeyModifiers::SHIFT).to_string(),
            "Shift-F3"
        );
        assert_eq!(
            KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)
                .to_string(),
            "Ctrl-Shift-S"
        );
        assert_eq!(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE).to_string(), "Del");
    }

    #[test]
    fn test_activate_key() {
        assert!(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE).is_activate());
        assert!(!KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT).is_activate());
        assert!(
            !KeyEvent::with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release)
                .is_activate()
        );
        assert!(!KeyEvent::char(' ').is_activate());
    }

    #[test]
    fn test_same_combination() {
        assert!(KeyEvent::alt('x').same_combination(&KeyEvent::alt('X')));
        assert!(
            KeyEvent::alt('x')
                .same_combination(&KeyEvent::new(KeyCode::Char('X'), KeyModifiers::ALT | KeyModifiers::SHIFT))
        );
        assert!(!KeyEvent::alt('x').same_combination(&KeyEvent::ctrl('x')));
        assert!(!KeyEvent::char('x').same_combination(&KeyEvent::char('y')));
    }

    #[test]
    fn test_from_crossterm() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('q'),
            crossterm::event::KeyModifiers::CONTROL,
        );
        let key = KeyEvent::from(ct);
        assert_eq!(key.code, KeyCode::Char('q'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL);
        assert!(key.is_press());
    }
}
