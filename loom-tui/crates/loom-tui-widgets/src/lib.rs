//! Loom TUI Widgets Library
//!
//! Widgets draw onto a backend's [`Screen`](loom_tui_buffer::Screen) in
//! their own local frame and react to input routed to them by the owning
//! tree. Selections become semantic events posted to an [`EventSink`].
//!
//! # Overview
//!
//! - **Widget trait**: [`Widget`] with its shared state in [`WidgetBase`].
//!   [`render_widget`] activates a widget's local frame before drawing.
//! - **Theme**: [`Theme`] resolves dotted style names, with overrides from
//!   [`ThemeConfig`].
//! - **Menus**: [`MenuItem`], the enable/check state machine behind each
//!   menu row, identified by [`MenuId`].
//!
//! # Example
//!
//! ```
//! use loom_tui_buffer::Screen;
//! use loom_tui_input::{KeyEvent, MouseButton, MouseEvent};
//! use loom_tui_widgets::{
//!     DrawContext, MenuEvent, MenuId, MenuItem, MenuItemConfig, Theme, Widget, render_widget,
//! };
//!
//! let mut item = MenuItem::new(MenuItemConfig::for_id(MenuId::EXIT), 0, 0, "E&xit")
//!     .with_key(KeyEvent::alt('x'));
//!
//! let theme = Theme::default();
//! let mut screen = Screen::new(20, 1);
//! render_widget(&item, &mut screen, &DrawContext::new(&theme));
//! assert!(screen.contains("Alt-X"));
//!
//! let mut events: Vec<MenuEvent> = Vec::new();
//! item.on_mouse_up(&MouseEvent::up(MouseButton::Left, 3, 0), &mut events);
//! assert_eq!(events, vec![MenuEvent::new(MenuId::EXIT)]);
//! ```

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod event;
pub mod menu;
mod mnemonic;
pub mod theme;
pub mod widget;

pub use event::{EventResult, EventSink, MenuEvent};
pub use menu::{MenuError, MenuId, MenuItem, MenuItemConfig, MenuItemState};
pub use mnemonic::MnemonicLabel;
pub use theme::{StyleSpec, Theme, ThemeConfig};
pub use widget::{DrawContext, Widget, WidgetBase, render_widget, route_mouse_up};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        DrawContext, EventResult, EventSink, MenuEvent, MenuId, MenuItem, MenuItemConfig,
        Theme, Widget, WidgetBase, render_widget,
    };
}
