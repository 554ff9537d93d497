//! Theme color handling with hex parsing and serialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB theme color with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThemeColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl ThemeColor {
    /// Creates a new `ThemeColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `ThemeColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use appforge::models::ThemeColor;
    ///
    /// let color = ThemeColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, ThemeColor::new(255, 0, 0));
    ///
    /// let color = ThemeColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, ThemeColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use appforge::models::ThemeColor;
    ///
    /// let color = ThemeColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns a darkened version of the color.
    ///
    /// Each channel is reduced by `round(2.55 * percent)` and clamped at 0,
    /// so `darken(20)` subtracts 51 from every channel. This is the exact
    /// formula used to derive secondary theme colors from a primary.
    ///
    /// # Examples
    ///
    /// ```
    /// use appforge::models::ThemeColor;
    ///
    /// let color = ThemeColor::new(0, 122, 255);
    /// assert_eq!(color.darken(20), ThemeColor::new(0, 71, 204));
    /// ```
    #[must_use]
    pub fn darken(&self, percent: u8) -> Self {
        let amount = (2.55_f32 * f32::from(percent)).round() as i16;
        Self {
            r: (i16::from(self.r) - amount).clamp(0, 255) as u8,
            g: (i16::from(self.g) - amount).clamp(0, 255) as u8,
            b: (i16::from(self.b) - amount).clamp(0, 255) as u8,
        }
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
