//! Display/input backends for Loom TUI.
//!
//! A [`Backend`] owns one [`Screen`] and one [`SessionInfo`] and hides how
//! they reach a person: a local terminal ([`TerminalBackend`]), a display
//! embedded in a host application ([`EmbeddedBackend`]) or a networked
//! session ([`RemoteBackend`]). Widgets only ever see the trait.
//!
//! [`Application`] drives a backend with the single-threaded loop widgets
//! expect: collect events, route and redraw, flush.
//!
//! ```
//! use loom_tui_backend::{Backend, BackendConfig, EmbeddedBackend, SessionInfo};
//! use loom_tui_core::Style;
//!
//! let session = SessionInfo::new("ada", "en_US.UTF-8", 20, 2);
//! let mut backend = EmbeddedBackend::new(session, BackendConfig::default());
//!
//! backend.screen_mut().put_string_at(0, 0, "ready", Style::default());
//! backend.flush_screen().unwrap();
//! assert_eq!(backend.display_row(0).unwrap().trim_end(), "ready");
//!
//! backend.shutdown().unwrap();
//! assert!(backend.flush_screen().is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod ansi;
mod application;
mod backend;
pub mod config;
mod embedded;
mod lifecycle;
mod remote;
mod session;
mod terminal;

pub use application::{AppState, Application};
pub use backend::{Backend, MAX_EVENTS_PER_POLL};
pub use config::BackendConfig;
pub use embedded::{EmbeddedBackend, EventInjector};
pub use lifecycle::{Lifecycle, LifecycleState};
pub use remote::RemoteBackend;
pub use session::SessionInfo;
pub use terminal::TerminalBackend;

pub use loom_tui_buffer::Screen;
pub use loom_tui_core::{Error, Result};
pub use loom_tui_input::Event;
