//! Core types for `Loom TUI`.
//!
//! This crate provides the fundamental building blocks shared by every other
//! Loom crate:
//!
//! - [`color`]: RGBA colors, hex and named parsing
//! - [`style`]: cell attributes (colors plus bold, reverse, ...)
//! - [`geometry`]: `Point` and `Rect` in cell units
//! - [`id`]: node handles used for non-owning parent references
//! - [`error`]: the error type returned by backends and screens
//!
//! # Examples
//!
//! ```
//! use loom_tui_core::{Color, Rect, Style};
//!
//! let menu = Style::with_colors(Color::BLACK, Color::WHITE);
//! let highlighted = menu.bg(Color::GREEN).bold();
//! assert!(highlighted.is_bold());
//!
//! let item = Rect::new(1, 2, 12, 1);
//! assert!(item.contains_xy(12, 2));
//! assert!(!item.contains_xy(13, 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]

pub mod color;
pub mod error;
pub mod geometry;
pub mod id;
pub mod style;

pub use color::Color;
pub use error::{ColorParseError, Error, Result};
pub use geometry::{Point, Rect};
pub use id::NodeId;
pub use style::{Style, TextAttributes};
