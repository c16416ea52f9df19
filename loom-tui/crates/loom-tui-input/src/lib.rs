//! Input events for Loom TUI.
//!
//! Backends translate whatever their device produces into [`Event`]s:
//! keyboard presses, mouse activity, resizes, pastes and focus changes.
//! Conversions from crossterm's event types are provided for the local
//! terminal backend.
//!
//! Mouse coordinates come in two flavours: the absolute screen position the
//! backend observed, and a local position that the widget tree rewrites with
//! [`MouseEvent::to_local`] before handing the event to a widget.

#![allow(clippy::module_name_repetitions)]

pub mod event;
pub mod keyboard;
pub mod mouse;

pub use event::Event;
pub use keyboard::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
pub use mouse::{MouseButton, MouseEvent, MouseEventKind};
