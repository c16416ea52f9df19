//! Screen surface for Loom TUI.
//!
//! A [`Screen`] is the grid of [`Cell`]s a backend owns and widgets draw
//! into. It remembers what was last synchronized to the device so a backend
//! can flush only the cells that changed (see [`diff`]).
//!
//! ```
//! use loom_tui_buffer::Screen;
//! use loom_tui_core::{Color, Rect, Style};
//!
//! let mut screen = Screen::new(20, 3);
//! screen.push_viewport(Rect::new(4, 1, 10, 1));
//! screen.put_string_at(0, 0, "File", Style::new().fg(Color::BLACK));
//! screen.pop_viewport();
//!
//! assert_eq!(screen.row_text(1).unwrap().trim_end(), "    File");
//! assert!(screen.is_dirty());
//! ```

#![warn(missing_docs)]

mod cell;
pub mod diff;
mod screen;

pub use cell::Cell;
pub use diff::{ChangeRun, ScreenDiff};
pub use screen::Screen;

pub use loom_tui_core::{Color, Rect, Style, TextAttributes};
