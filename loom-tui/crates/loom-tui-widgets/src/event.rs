//! Semantic events posted by widgets and the results of event handling.

use std::collections::VecDeque;
use std::fmt;

use crate::menu::MenuId;

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, should not propagate further.
    Handled,
    /// Event was not handled, should propagate to parent.
    Ignored,
}

impl EventResult {
    /// Returns true if the event was handled.
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }

    /// Returns true if the event was ignored.
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled { Self::Handled } else { Self::Ignored }
    }
}

/// Combines multiple event results (handled if any handled).
impl std::ops::BitOr for EventResult {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        if self.is_handled() || rhs.is_handled() {
            Self::Handled
        } else {
            Self::Ignored
        }
    }
}

/// A menu item was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuEvent {
    /// Id of the selected item.
    pub id: MenuId,
}

impl MenuEvent {
    /// Creates an event for `id`.
    pub const fn new(id: MenuId) -> Self {
        Self { id }
    }
}

impl fmt::Display for MenuEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MenuEvent({})", self.id)
    }
}

/// Receiver of the semantic events widgets produce.
///
/// The application owns the sink and drains it after routing each batch of
/// input.
pub trait EventSink {
    /// Queues a menu selection.
    fn post_menu_event(&mut self, event: MenuEvent);
}

impl EventSink for Vec<MenuEvent> {
    fn post_menu_event(&mut self, event: MenuEvent) {
        self.push(event);
    }
}

impl EventSink for VecDeque<MenuEvent> {
    fn post_menu_event(&mut self, event: MenuEvent) {
        self.push_back(event);
    }
}
