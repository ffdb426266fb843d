//! Paint styles and colors for star rendering.

use std::fmt;
use std::str::FromStr;

use peniko::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{ConfigError, ConfigResult};

/// How a path is painted.
///
/// Dim stars and the dim half of a split star use the configured style;
/// bright stars are always filled and stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarStyle {
    /// Interior only.
    Fill,
    /// Outline only.
    #[default]
    Stroke,
    /// Interior and outline.
    FillAndStroke,
}

impl StarStyle {
    /// Map a numeric style code (1 = fill, 2 = stroke, 3 = fill and stroke).
    pub fn from_code(code: i64) -> ConfigResult<Self> {
        match code {
            1 => Ok(StarStyle::Fill),
            2 => Ok(StarStyle::Stroke),
            3 => Ok(StarStyle::FillAndStroke),
            other => Err(ConfigError::UnknownStyleCode(other)),
        }
    }

    /// The numeric code for this style.
    pub fn code(self) -> i64 {
        match self {
            StarStyle::Fill => 1,
            StarStyle::Stroke => 2,
            StarStyle::FillAndStroke => 3,
        }
    }

    /// Whether the interior is painted.
    pub fn fills(self) -> bool {
        matches!(self, StarStyle::Fill | StarStyle::FillAndStroke)
    }

    /// Whether the outline is painted.
    pub fn strokes(self) -> bool {
        matches!(self, StarStyle::Stroke | StarStyle::FillAndStroke)
    }

    /// Cycle to the next style.
    pub fn next(self) -> Self {
        match self {
            StarStyle::Fill => StarStyle::Stroke,
            StarStyle::Stroke => StarStyle::FillAndStroke,
            StarStyle::FillAndStroke => StarStyle::Fill,
        }
    }
}

impl FromStr for StarStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "fill" => Ok(StarStyle::Fill),
            "stroke" => Ok(StarStyle::Stroke),
            "fillandstroke" => Ok(StarStyle::FillAndStroke),
            _ => Err(ConfigError::UnknownStyleName(s.to_string())),
        }
    }
}

impl Serialize for StarStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for StarStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(i64),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Code(code) => StarStyle::from_code(code).map_err(serde::de::Error::custom),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Serializable color representation (RGBA8).
///
/// Serializes as a `#RRGGBBAA` hex string; deserializes from either a hex
/// string (`#RRGGBB` or `#RRGGBBAA`) or an `{ r, g, b, a }` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Default bright star color.
    pub const fn yellow() -> Self {
        Self::new(255, 255, 0, 255)
    }

    /// Default dim star color.
    pub const fn gray() -> Self {
        Self::new(136, 136, 136, 255)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for SerializableColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for SerializableColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl Serialize for SerializableColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SerializableColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Rgba {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(hex) => hex.parse().map_err(serde::de::Error::custom),
            Repr::Rgba { r, g, b, a } => Ok(Self::new(r, g, b, a)),
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Paint parameters attached to a single path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: SerializableColor,
    pub style: StarStyle,
    pub stroke_width: f64,
}

impl Paint {
    pub fn new(color: impl Into<SerializableColor>, style: StarStyle, stroke_width: f64) -> Self {
        Self {
            color: color.into(),
            style,
            stroke_width,
        }
    }

    /// The color as a peniko Color.
    pub fn color(&self) -> Color {
        self.color.into()
    }
}
