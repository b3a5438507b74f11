//! Structured RGBA colour.
//!
//! Colours arrive from the event layer as CSS strings (`"rgba(r,g,b,a)"`).
//! They are parsed once into four channels so that faded variants are a
//! channel update instead of string surgery.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An RGBA colour with every channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// Fill used for auxiliary vertex markers (`#b8b8b8`).
    pub const AUX_GRAY: Color = Color {
        r: 184.0 / 255.0,
        g: 184.0 / 255.0,
        b: 184.0 / 255.0,
        a: 1.0,
    };

    /// Build a colour from 8-bit channels and a `0.0..=1.0` alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Same colour with the alpha channel replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// The 8-bit RGB channels.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Serializes as `rgba(r,g,b,a)`, the form the event layer sends.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "rgba({},{},{},{})", r, g, b, self.a)
    }
}

/// Errors produced when parsing a colour string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    /// Neither a `rgb()`/`rgba()` function nor a hex literal
    #[error("Unrecognized colour syntax: '{0}'")]
    UnknownSyntax(String),

    /// Wrong number of components inside `rgb()`/`rgba()`
    #[error("Expected {expected} colour components, found {found}")]
    ComponentCount { expected: usize, found: usize },

    /// A component is not a number or is out of range
    #[error("Invalid colour component '{0}'")]
    InvalidComponent(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let (inner, expected) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, 4)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, 3)
        } else {
            return Err(ColorParseError::UnknownSyntax(s.to_string()));
        };
        let inner = inner
            .strip_suffix(')')
            .ok_or_else(|| ColorParseError::UnknownSyntax(s.to_string()))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != expected {
            return Err(ColorParseError::ComponentCount {
                expected,
                found: parts.len(),
            });
        }

        let r = parse_channel(parts[0])?;
        let g = parse_channel(parts[1])?;
        let b = parse_channel(parts[2])?;
        let a = match parts.get(3) {
            Some(a) => parse_alpha(a)?,
            None => 1.0,
        };

        Ok(Color::from_rgba8(r, g, b, a))
    }
}

fn parse_channel(s: &str) -> Result<u8, ColorParseError> {
    let value: f32 = s
        .parse()
        .map_err(|_| ColorParseError::InvalidComponent(s.to_string()))?;
    if !(0.0..=255.0).contains(&value) {
        return Err(ColorParseError::InvalidComponent(s.to_string()));
    }
    Ok(value.round() as u8)
}

fn parse_alpha(s: &str) -> Result<f32, ColorParseError> {
    let value: f32 = s
        .parse()
        .map_err(|_| ColorParseError::InvalidComponent(s.to_string()))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorParseError::InvalidComponent(s.to_string()));
    }
    Ok(value)
}

fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    let digit = |i: usize, len: usize| {
        u8::from_str_radix(&hex[i..i + len], 16)
            .map_err(|_| ColorParseError::InvalidComponent(format!("#{}", hex)))
    };

    match hex.len() {
        // #rgb expands each nibble
        3 if hex.is_ascii() => {
            let r = digit(0, 1)?;
            let g = digit(1, 1)?;
            let b = digit(2, 1)?;
            Ok(Color::from_rgba8(r * 17, g * 17, b * 17, 1.0))
        }
        6 if hex.is_ascii() => Ok(Color::from_rgba8(
            digit(0, 2)?,
            digit(2, 2)?,
            digit(4, 2)?,
            1.0,
        )),
        _ => Err(ColorParseError::UnknownSyntax(format!("#{}", hex))),
    }
}
