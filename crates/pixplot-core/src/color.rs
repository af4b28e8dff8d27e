//! 24-bit RGB colors and the named-color resolver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque 24-bit color packed as `0xRRGGBB`.
///
/// Bits above the low 24 are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    /// Black color
    pub const BLACK: Self = Self(0x00_00_00);
    /// White color
    pub const WHITE: Self = Self(0xFF_FF_FF);
    /// Red color
    pub const RED: Self = Self(0xFF_00_00);
    /// Green color
    pub const GREEN: Self = Self(0x00_FF_00);
    /// Blue color
    pub const BLUE: Self = Self(0x00_00_FF);
    /// Light gray used for grid lines.
    pub const LIGHT_GRAY: Self = Self(0xCC_CC_CC);

    /// Create a color from a packed value, discarding bits above 24.
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self(packed & 0x00FF_FFFF)
    }

    /// Create a color from its three channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Channels as an `(r, g, b)` triple.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength);
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or(ColorParseError::InvalidHex)
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert to a `#rrggbb` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self::from_u32(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<ColorName> for Color {
    fn from(name: ColorName) -> Self {
        name.color()
    }
}

/// The fixed vocabulary of symbolic color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Red,
    Green,
    Blue,
    White,
    Black,
}

impl ColorName {
    /// All known names, in table order.
    pub const ALL: [Self; 5] = [Self::Red, Self::Green, Self::Blue, Self::White, Self::Black];

    /// The fixed 24-bit value for this name.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Red => Color::RED,
            Self::Green => Color::GREEN,
            Self::Blue => Color::BLUE,
            Self::White => Color::WHITE,
            Self::Black => Color::BLACK,
        }
    }

    /// Lowercase name as written in configs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl FromStr for ColorName {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color as supplied by a caller: a symbolic name or an already packed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorSpec {
    Named(ColorName),
    Rgb(u32),
}

impl ColorSpec {
    /// Parse like [`FromStr`], but map anything unrecognised to `Rgb(0)`.
    ///
    /// Unknown names end up black once rasterized, so this keeps that outcome
    /// for callers feeding free-form strings.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(Self::Rgb(0))
    }
}

impl FromStr for ColorSpec {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(name) = s.parse::<ColorName>() {
            return Ok(Self::Named(name));
        }
        let trimmed = s.trim();
        let bare_hex = trimmed.len() == 6 && trimmed.chars().all(|c| c.is_ascii_hexdigit());
        if trimmed.starts_with('#') || bare_hex {
            return Color::from_hex(trimmed).map(|c| Self::Rgb(c.to_u32()));
        }
        Err(ColorParseError::UnknownName(s.to_string()))
    }
}

impl TryFrom<String> for ColorSpec {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorSpec> for String {
    fn from(spec: ColorSpec) -> Self {
        match spec {
            ColorSpec::Named(name) => name.as_str().to_string(),
            ColorSpec::Rgb(packed) => Color::from_u32(packed).to_hex(),
        }
    }
}

impl From<ColorName> for ColorSpec {
    fn from(name: ColorName) -> Self {
        Self::Named(name)
    }
}

impl From<u32> for ColorSpec {
    fn from(packed: u32) -> Self {
        Self::Rgb(packed)
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::Rgb(color.to_u32())
    }
}

/// Resolve a caller color against a fallback.
///
/// Absence selects `fallback`; names map through the fixed table; numeric
/// values pass through; nothing at all yields black.
///
/// Only `None` means "use the default". An explicit `Rgb(0)` is black, not a
/// request for the fallback, so callers must pass `None` to get the default.
#[must_use]
pub fn resolve(color: Option<ColorSpec>, fallback: Option<ColorSpec>) -> Color {
    match color.or(fallback) {
        Some(ColorSpec::Named(name)) => name.color(),
        Some(ColorSpec::Rgb(packed)) => Color::from_u32(packed),
        None => Color::BLACK,
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
    /// Not one of the known color names
    UnknownName(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6)"),
            Self::UnknownName(name) => write!(f, "unknown color name: {name:?}"),
        }
    }
}

impl std::error::Error for ColorParseError {}
