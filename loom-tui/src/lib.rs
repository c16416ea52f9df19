//! # Loom TUI
//!
//! The interaction core of a terminal widget toolkit: interchangeable
//! display/input backends, the cell screen they flush, and the menu item
//! state machine that reacts to their events.
//!
//! ## Crates
//!
//! - [`core`]: colors, styles, geometry, ids and the shared error type
//! - [`buffer`]: the [`Screen`](buffer::Screen) with dirty tracking and
//!   local frames
//! - [`input`]: keyboard, mouse and window events
//! - [`backend`]: the [`Backend`](backend::Backend) trait, its terminal,
//!   embedded and remote variants, and the [`Application`](backend::Application) loop
//! - [`widgets`]: the widget trait, themes and menu items
//!
//! ## Example
//!
//! ```no_run
//! use loom_tui::prelude::*;
//!
//! fn main() -> loom_tui::core::Result<()> {
//!     let config = LoomConfig::load_default()?;
//!     let _log_guard = loom_tui::logging::init(&config.logging)?;
//!
//!     let theme = config.theme();
//!     let mut item = MenuItem::new(MenuItemConfig::for_id(MenuId::EXIT), 0, 0, "E&xit")
//!         .with_key(KeyEvent::alt('x'));
//!     let mut selections: Vec<MenuEvent> = Vec::new();
//!
//!     let backend = TerminalBackend::new(config.backend.clone())?;
//!     let mut app = Application::new(backend);
//!     app.run_with_events(|screen, events| {
//!         for event in events {
//!             match event {
//!                 Event::Mouse(mouse) if mouse.is_button1_release() => {
//!                     route_mouse_up(&mut item, mouse, Point::ZERO, &mut selections);
//!                 }
//!                 Event::Key(key) if item.matches_accelerator(key) => {
//!                     let _ = item.dispatch(&mut selections);
//!                 }
//!                 _ => {}
//!             }
//!         }
//!         render_widget(&item, screen, &DrawContext::new(&theme));
//!         !selections.iter().any(|e| e.id == MenuId::EXIT)
//!     })
//! }
//! ```

pub mod config;
pub mod logging;

pub use loom_tui_backend as backend;
pub use loom_tui_buffer as buffer;
pub use loom_tui_core as core;
pub use loom_tui_input as input;
pub use loom_tui_widgets as widgets;

pub use config::LoomConfig;
pub use logging::LoggingConfig;

/// Commonly used types.
pub mod prelude {
    pub use crate::config::LoomConfig;
    pub use crate::logging::LoggingConfig;

    pub use loom_tui_backend::{
        Application, Backend, BackendConfig, EmbeddedBackend, RemoteBackend, SessionInfo,
        TerminalBackend,
    };
    pub use loom_tui_buffer::{Cell, Screen};
    pub use loom_tui_core::{Color, Error, NodeId, Point, Rect, Result, Style, TextAttributes};
    pub use loom_tui_input::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    pub use loom_tui_widgets::{
        DrawContext, EventResult, EventSink, MenuError, MenuEvent, MenuId, MenuItem,
        MenuItemConfig, MenuItemState, Theme, ThemeConfig, Widget, WidgetBase, render_widget,
        route_mouse_up,
    };
}
