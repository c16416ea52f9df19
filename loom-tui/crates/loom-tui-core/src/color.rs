//! RGBA color representation.
//!
//! Colors use normalized f32 components in the range 0.0 to 1.0. A fully
//! transparent color means "terminal default" when a cell is written out.
//!
//! # Supported Formats
//!
//! - Hex strings: `#RGB`, `#RRGGBB`, `#RRGGBBAA`
//! - RGB u8 values
//! - Named colors (`black`, `brightblue`, `transparent`, ...)
//!
//! ```
//! use loom_tui_core::color::Color;
//!
//! let red = Color::from_hex("#FF0000").unwrap();
//! assert_eq!(red, Color::RED);
//! assert_eq!(Color::parse("navy").unwrap(), Color::NAVY);
//! ```

use crate::error::ColorParseError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// An RGBA color with normalized f32 components.
#[derive(Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    /// Red component (0.0 - 1.0).
    pub r: f32,
    /// Green component (0.0 - 1.0).
    pub g: f32,
    /// Blue component (0.0 - 1.0).
    pub b: f32,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1.0 {
            write!(f, "Color::rgb({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba({:.3}, {:.3}, {:.3}, {:.3})",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ============================================================================
// Color constants
// ============================================================================

impl Color {
    /// Fully transparent color (alpha = 0).
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Opaque black (#000000).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white (#FFFFFF).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque red (#FF0000).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Opaque green (#00FF00).
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Opaque blue (#0000FF).
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Opaque yellow (#FFFF00).
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// Opaque cyan (#00FFFF).
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);

    /// Opaque magenta (#FF00FF).
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);

    /// Medium gray (#808080).
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    /// Dark gray (#404040).
    pub const DARK_GRAY: Self = Self::rgb(0.25, 0.25, 0.25);

    /// Light gray (#C0C0C0).
    pub const LIGHT_GRAY: Self = Self::rgb(0.75, 0.75, 0.75);

    /// Navy (#000080).
    pub const NAVY: Self = Self::rgb(0.0, 0.0, 0.5);

    /// Teal (#008080).
    pub const TEAL: Self = Self::rgb(0.0, 0.5, 0.5);

    /// Maroon (#800000).
    pub const MAROON: Self = Self::rgb(0.5, 0.0, 0.0);

    /// Dim ANSI green (#008000).
    pub const DARK_GREEN: Self = Self::rgb(0.0, 0.5, 0.0);
}

// ============================================================================
// Constructors
// ============================================================================

impl Color {
    /// Creates a color from normalized RGBA components.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from normalized RGB components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from u8 RGBA components.
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates an opaque color from u8 RGB components.
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parses a color from a hex string (`#RGB`, `#RRGGBB`, `#RRGGBBAA`).
    ///
    /// The `#` prefix is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHexChar);
        }

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        let component = |range: std::ops::Range<usize>| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| ColorParseError::InvalidHexChar)
        };

        let r = component(0..2)?;
        let g = component(2..4)?;
        let b = component(4..6)?;
        let a = if expanded.len() == 8 {
            component(6..8)?
        } else {
            255
        };

        Ok(Self::from_rgba_u8(r, g, b, a))
    }

    /// Parses a color name, `transparent`, or a hex string.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        if let Some(color) = Self::from_name(trimmed) {
            return Ok(color);
        }
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        Self::from_hex(trimmed).map_err(|_| ColorParseError::UnknownColor(trimmed.to_string()))
    }

    /// Returns the color for an ANSI-style name, or `None` if unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "transparent" | "default" => Some(Self::TRANSPARENT),
            "black" => Some(Self::BLACK),
            "white" | "brightwhite" => Some(Self::WHITE),
            "red" | "brightred" => Some(Self::RED),
            "green" | "brightgreen" => Some(Self::GREEN),
            "blue" | "brightblue" => Some(Self::BLUE),
            "yellow" | "brightyellow" => Some(Self::YELLOW),
            "cyan" | "brightcyan" => Some(Self::CYAN),
            "magenta" | "brightmagenta" => Some(Self::MAGENTA),
            "gray" | "grey" | "brightblack" => Some(Self::GRAY),
            "darkgray" | "darkgrey" => Some(Self::DARK_GRAY),
            "lightgray" | "lightgrey" | "silver" => Some(Self::LIGHT_GRAY),
            "navy" => Some(Self::NAVY),
            "teal" => Some(Self::TEAL),
            "maroon" => Some(Self::MAROON),
            "darkgreen" => Some(Self::DARK_GREEN),
            _ => None,
        }
    }
}

// ============================================================================
// Conversion
// ============================================================================

impl Color {
    /// Returns the color components as u8 values (0-255).
    #[inline]
    pub fn to_rgba_u8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Returns the RGB components as u8 values (0-255).
    #[inline]
    pub fn to_rgb_u8(&self) -> (u8, u8, u8) {
        let (r, g, b, _) = self.to_rgba_u8();
        (r, g, b)
    }

    /// Formats the color as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba_u8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Returns whether the color is fully transparent.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a <= f32::EPSILON
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
