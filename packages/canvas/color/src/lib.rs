//! Colors as understood by a browser 2D drawing context.
//!
//! This crate provides the [`Color`] type used for canvas fill and stroke
//! styles, along with its wire encoding. Opaque colors encode as `#RRGGBB`
//! and translucent colors encode as `rgba(r,g,b,a)`, both of which are valid
//! CSS color syntax accepted by `CanvasRenderingContext2D.fillStyle`.
//!
//! # Features
//!
//! * Encode colors to CSS color strings via [`std::fmt::Display`]
//! * Decode CSS color strings (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`,
//!   `rgb(..)`, `rgba(..)`) via [`std::str::FromStr`]
//! * Optional property testing support (via `arb` feature)
//! * Optional serialization support (via `serde` feature)
//!
//! # Examples
//!
//! ```rust
//! use remote_canvas_color::Color;
//!
//! assert_eq!(Color::rgb(255, 87, 51).to_string(), "#FF5733");
//! assert_eq!(Color::rgba(255, 0, 0, 0.5).to_string(), "rgba(255,0,0,0.5)");
//!
//! let parsed: Color = "#FF5733".parse().unwrap();
//! assert_eq!(parsed, Color::rgb(255, 87, 51));
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::str::FromStr;

use thiserror::Error;

/// Property testing support via proptest.
#[cfg(feature = "arb")]
pub mod arb;

/// Errors that can occur when decoding a CSS color string.
#[derive(Debug, Error, PartialEq)]
pub enum ParseColorError {
    /// An invalid hex character was encountered at the specified index.
    #[error("Invalid character at index {0} '{1}'")]
    InvalidCharacter(usize, char),
    /// A hex color did not have 3, 4, 6 or 8 digits.
    #[error("Invalid hex length {0}")]
    InvalidLength(usize),
    /// A functional color did not have the expected number of components.
    #[error("Expected {expected} components, got {actual}")]
    ComponentCount { expected: usize, actual: usize },
    /// A channel component was not an integer in `0..=255`.
    #[error("Invalid channel value '{0}'")]
    InvalidChannel(String),
    /// The alpha component was not a number in `0..=1`.
    #[error("Invalid alpha value '{0}'")]
    InvalidAlpha(String),
    /// The string was not a hex, `rgb(..)` or `rgba(..)` color.
    #[error("Unsupported color format '{0}'")]
    UnsupportedFormat(String),
}

/// An opaque RGB color or an RGB color with an opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Color {
    /// Fully opaque color.
    Rgb { r: u8, g: u8, b: u8 },
    /// Color with an opacity, where `0.0` is transparent and `1.0` is opaque.
    Rgba { r: u8, g: u8, b: u8, a: f64 },
}

impl Color {
    /// Black color constant (RGB: 0, 0, 0).
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White color constant (RGB: 255, 255, 255).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::Rgba { r, g, b, a }
    }

    #[must_use]
    pub const fn r(&self) -> u8 {
        match self {
            Self::Rgb { r, .. } | Self::Rgba { r, .. } => *r,
        }
    }

    #[must_use]
    pub const fn g(&self) -> u8 {
        match self {
            Self::Rgb { g, .. } | Self::Rgba { g, .. } => *g,
        }
    }

    #[must_use]
    pub const fn b(&self) -> u8 {
        match self {
            Self::Rgb { b, .. } | Self::Rgba { b, .. } => *b,
        }
    }

    /// The opacity as given at construction, `None` for opaque colors.
    #[must_use]
    pub const fn alpha(&self) -> Option<f64> {
        match self {
            Self::Rgb { .. } => None,
            Self::Rgba { a, .. } => Some(*a),
        }
    }

    /// Returns the same channels with the given opacity.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Returns the same channels without an opacity.
    #[must_use]
    pub const fn opaque(self) -> Self {
        Self::rgb(self.r(), self.g(), self.b())
    }

    /// The opacity that is put on the wire.
    ///
    /// Values outside `[0, 1]` are clamped and `NaN` becomes `0`.
    #[must_use]
    pub fn wire_alpha(&self) -> Option<f64> {
        self.alpha()
            .map(|a| if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) })
    }

    /// Decodes a CSS color string, ignoring surrounding whitespace.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional),
    /// `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    ///
    /// # Errors
    ///
    /// * `ParseColorError::InvalidCharacter` - If a hex color contains a non-hex character
    /// * `ParseColorError::InvalidLength` - If a hex color has an unsupported number of digits
    /// * `ParseColorError::ComponentCount` - If `rgb(..)`/`rgba(..)` has the wrong arity
    /// * `ParseColorError::InvalidChannel` - If a channel is not an integer in `0..=255`
    /// * `ParseColorError::InvalidAlpha` - If the alpha is not a number in `0..=1`
    /// * `ParseColorError::UnsupportedFormat` - If the string is none of the above
    pub fn try_from_css(value: &str) -> Result<Self, ParseColorError> {
        let value = value.trim();

        if let Some(args) = functional_args(value, "rgba") {
            let [r, g, b, a] = components::<4>(args)?;
            return Ok(Self::rgba(channel(r)?, channel(g)?, channel(b)?, alpha(a)?));
        }
        if let Some(args) = functional_args(value, "rgb") {
            let [r, g, b] = components::<3>(args)?;
            return Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?));
        }

        let hex = value.strip_prefix('#').unwrap_or(value);

        if hex.is_empty() || hex.contains(['(', ')', ',']) {
            return Err(ParseColorError::UnsupportedFormat(value.to_string()));
        }

        parse_hex(hex)
    }
}

fn functional_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let rest = value.get(..name.len())?;
    if !rest.eq_ignore_ascii_case(name) {
        return None;
    }
    value[name.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn components<const N: usize>(args: &str) -> Result<[&str; N], ParseColorError> {
    let parts = args.split(',').map(str::trim).collect::<Vec<_>>();
    let actual = parts.len();

    parts
        .try_into()
        .map_err(|_| ParseColorError::ComponentCount {
            expected: N,
            actual,
        })
}

fn channel(value: &str) -> Result<u8, ParseColorError> {
    value
        .parse::<u8>()
        .map_err(|_| ParseColorError::InvalidChannel(value.to_string()))
}

fn alpha(value: &str) -> Result<f64, ParseColorError> {
    match value.parse::<f64>() {
        Ok(a) if (0.0..=1.0).contains(&a) => Ok(a),
        _ => Err(ParseColorError::InvalidAlpha(value.to_string())),
    }
}

#[allow(clippy::many_single_char_names)]
fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    let digits = hex
        .chars()
        .enumerate()
        .map(|(i, c)| {
            c.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParseColorError::InvalidCharacter(i, c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let short = |d: u8| (d << 4) | d;
    let long = |hi: u8, lo: u8| (hi << 4) | lo;

    Ok(match *digits.as_slice() {
        [r, g, b] => Color::rgb(short(r), short(g), short(b)),
        [r, g, b, a] => Color::rgba(short(r), short(g), short(b), f64::from(short(a)) / 255.0),
        [r1, r2, g1, g2, b1, b2] => Color::rgb(long(r1, r2), long(g1, g2), long(b1, b2)),
        [r1, r2, g1, g2, b1, b2, a1, a2] => Color::rgba(
            long(r1, r2),
            long(g1, g2),
            long(b1, b2),
            f64::from(long(a1, a2)) / 255.0,
        ),
        _ => return Err(ParseColorError::InvalidLength(digits.len())),
    })
}

/// Encodes [`Color`] as a CSS color string.
///
/// * Opaque colors: `#RRGGBB`, two uppercase hex digits per channel
/// * Translucent colors: `rgba(R,G,B,A)` with `A` as a decimal fraction
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.wire_alpha() {
            Some(a) => write!(f, "rgba({},{},{},{a})", self.r(), self.g(), self.b()),
            None => write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b()),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_css(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, f64)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, f64)) -> Self {
        Self::rgba(r, g, b, a)
    }
}
