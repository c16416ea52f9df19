//! The top-level input event type.

use crate::keyboard::KeyEvent;
use crate::mouse::MouseEvent;
use std::fmt;

/// Any input event a backend can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// The display was resized to the given width and height.
    Resize(u16, u16),
    /// Text was pasted (bracketed paste mode).
    Paste(String),
    /// The display gained or lost focus.
    Focus(bool),
}

impl Event {
    /// Returns the key event if this is a `Key` variant.
    #[must_use]
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the mouse event if this is a `Mouse` variant.
    #[must_use]
    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            Event::Mouse(mouse) => Some(mouse),
            _ => None,
        }
    }

    /// Returns the new dimensions if this is a `Resize` variant.
    #[must_use]
    pub fn as_resize(&self) -> Option<(u16, u16)> {
        match self {
            Event::Resize(w, h) => Some((*w, *h)),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Key(key) => write!(f, "Key({key})"),
            Event::Mouse(mouse) => write!(f, "Mouse({mouse})"),
            Event::Resize(w, h) => write!(f, "Resize({w}x{h})"),
            Event::Paste(text) => {
                let preview: String = text.chars().take(20).collect();
                if preview.len() < text.len() {
                    write!(f, "Paste({preview:?}...)")
                } else {
                    write!(f, "Paste({preview:?})")
                }
            }
            Event::Focus(true) => write!(f, "Focus(gained)"),
            Event::Focus(false) => write!(f, "Focus(lost)"),
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Event::Key(event)
    }
}

impl From<MouseEvent> for Event {
    fn from(event: MouseEvent) -> Self {
        Event::Mouse(event)
    }
}

impl From<crossterm::event::Event> for Event {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(key) => Event::Key(key.into()),
            crossterm::event::Event::Mouse(mouse) => Event::Mouse(mouse.into()),
            crossterm::event::Event::Resize(w, h) => Event::Resize(w, h),
            crossterm::event::Event::Paste(text) => Event::Paste(text),
            crossterm::event::Event::FocusGained => Event::Focus(true),
            crossterm::event::Event::FocusLost => Event::Focus(false),
        }
    }
}
