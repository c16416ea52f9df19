//! Menu items and their identifiers.

mod item;

use std::fmt;

use thiserror::Error;

pub use item::MenuItem;

/// Identifies the action a menu item stands for.
///
/// Ids below [`MenuId::RESERVED_LIMIT`] name well-known system actions;
/// applications number their own items from there up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(pub i32);

impl MenuId {
    /// Placeholder for items with no action.
    pub const UNUSED: Self = Self(-1);

    /// First id available to applications.
    pub const RESERVED_LIMIT: i32 = 1024;

    pub const EXIT: Self = Self(1);
    pub const QUIT: Self = Self(2);
    pub const OPEN_FILE: Self = Self(3);
    pub const SHELL: Self = Self(4);

    pub const CUT: Self = Self(10);
    pub const COPY: Self = Self(11);
    pub const PASTE: Self = Self(12);
    pub const CLEAR: Self = Self(13);

    pub const TILE: Self = Self(100);
    pub const CASCADE: Self = Self(101);
    pub const CLOSE_ALL: Self = Self(102);
    pub const WINDOW_MOVE: Self = Self(103);
    pub const WINDOW_ZOOM: Self = Self(104);
    pub const WINDOW_NEXT: Self = Self(105);
    pub const WINDOW_PREVIOUS: Self = Self(106);
    pub const WINDOW_CLOSE: Self = Self(107);

    pub const HELP_CONTENTS: Self = Self(200);
    pub const ABOUT: Self = Self(201);

    /// Returns true for ids in the system range.
    pub const fn is_reserved(self) -> bool {
        self.0 >= 0 && self.0 < Self::RESERVED_LIMIT
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a menu item starts out.
///
/// Supplied by whoever builds the menu, so the item itself needs no
/// knowledge of particular ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItemConfig {
    pub id: MenuId,
    pub default_enabled: bool,
    pub checkable: bool,
}

impl MenuItemConfig {
    /// An enabled, non-checkable item.
    pub const fn new(id: MenuId) -> Self {
        Self {
            id,
            default_enabled: true,
            checkable: false,
        }
    }

    /// The standard starting state for `id`.
    ///
    /// Clipboard actions start disabled until there is something to act
    /// on; everything else starts enabled.
    pub const fn for_id(id: MenuId) -> Self {
        let default_enabled = !matches!(
            id,
            MenuId::CUT | MenuId::COPY | MenuId::PASTE | MenuId::CLEAR
        );
        Self {
            id,
            default_enabled,
            checkable: false,
        }
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.default_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }
}

/// Misuse of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MenuError {
    /// `dispatch` was called on a disabled item.
    #[error("menu item {id} is disabled")]
    Disabled { id: MenuId },

    /// A non-checkable item was asked to become checked.
    #[error("menu item {id} is not checkable")]
    NotCheckable { id: MenuId },
}

/// Observable state of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemState {
    Disabled,
    EnabledUnchecked,
    EnabledChecked,
}
