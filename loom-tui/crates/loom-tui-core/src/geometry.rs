//! Geometry types for positioning in character cells.
//!
//! - [`Point`]: a 2D point with signed coordinates
//! - [`Rect`]: a positioned rectangle
//!
//! Coordinates are signed so that local frames can describe positions left
//! of or above their origin (a mouse event one column outside a widget has
//! local column `-1`).

use std::ops::{Add, Sub};

/// A 2D point with signed integer coordinates.
///
/// ```
/// use loom_tui_core::geometry::Point;
///
/// let p = Point::new(10, 20) + Point::new(5, 5);
/// assert_eq!(p, Point::new(15, 25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The x coordinate (column position).
    pub x: i32,
    /// The y coordinate (row position).
    pub y: i32,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a new point at the given coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point offset by the given amounts.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A rectangle in cell coordinates.
///
/// ```
/// use loom_tui_core::geometry::{Point, Rect};
///
/// let rect = Rect::new(10, 5, 60, 18);
/// assert_eq!(rect.right(), 70);
/// assert!(rect.contains_point(Point::new(30, 10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// The x coordinate of the left edge.
    pub x: i32,
    /// The y coordinate of the top edge.
    pub y: i32,
    /// The width of the rectangle.
    pub width: u16,
    /// The height of the rectangle.
    pub height: u16,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle at the given position with the given size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the top-left corner.
    #[inline]
    pub const fn position(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the x coordinate one past the right edge.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    /// Returns the y coordinate one past the bottom edge.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    /// Returns whether the rectangle has zero area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns whether the rectangle contains the given point.
    #[inline]
    pub const fn contains_point(self, point: Point) -> bool {
        self.contains_xy(point.x, point.y)
    }

    /// Returns whether the rectangle contains the point at (x, y).
    #[inline]
    pub const fn contains_xy(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns the intersection of this rectangle with another.
    ///
    /// Returns `None` if the rectangles do not overlap.
    #[inline]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Self {
                x,
                y,
                width: (right - x) as u16,
                height: (bottom - y) as u16,
            })
        } else {
            None
        }
    }

    /// Returns the rectangle moved by the given offset.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            width: self.width,
            height: self.height,
        }
    }

    /// Converts an absolute point into this rectangle's local frame.
    #[inline]
    pub const fn to_local(self, point: Point) -> Point {
        Point {
            x: point.x.saturating_sub(self.x),
            y: point.y.saturating_sub(self.y),
        }
    }
}
