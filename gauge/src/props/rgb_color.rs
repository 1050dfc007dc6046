// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{de::{self, Visitor},
            Deserialize, Deserializer, Serialize, Serializer};

use crate::props::hex_color_parser::parse_hex_color;

/// Failure to parse a hex color string with
/// [`RgbColor::try_from_hex_color`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("invalid hex color {input:?}")]
#[diagnostic(
    code(r3bl_gauge::props::invalid_hex_color),
    help("Valid formats are `#RRGGBB` and `#RGB`, eg: `#00C0FF` or `#fff`.")
)]
pub struct InvalidHexColor {
    /// The string that failed to parse.
    pub input: String,
}

/// An RGB color. Persists as a hex color string (`#rrggbb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> RgbColor {
        RgbColor { red, green, blue }
    }

    /// Parse a `#RRGGBB` or `#RGB` hex color string.
    ///
    /// # Errors
    ///
    /// [`InvalidHexColor`] if the input is not a valid hex color format.
    pub fn try_from_hex_color(input: &str) -> Result<RgbColor, InvalidHexColor> {
        match parse_hex_color(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(InvalidHexColor {
                input: input.to_string(),
            }),
        }
    }

    /// # Panics
    ///
    /// This function will panic if the input string is not a valid hex color format.
    #[must_use]
    pub fn from_hex(input: &str) -> RgbColor {
        #[allow(clippy::match_wild_err_arm)]
        match parse_hex_color(input) {
            Ok((_, color)) => color,
            Err(_) => {
                panic!("Invalid hex color format: {input}")
            }
        }
    }
}

impl Default for RgbColor {
    /// White, the bajaux `fill` / `background` default.
    fn default() -> Self { RgbColor::from_u8(255, 255, 255) }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl From<RgbColor> for crossterm::style::Color {
    fn from(it: RgbColor) -> Self {
        crossterm::style::Color::Rgb {
            r: it.red,
            g: it.green,
            b: it.blue,
        }
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexColorVisitor;

        impl Visitor<'_> for HexColorVisitor {
            type Value = RgbColor;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a hex color string like `#00C0FF`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                RgbColor::try_from_hex_color(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(HexColorVisitor)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_try_from_hex_color() {
        // Valid.
        {
            let value = RgbColor::try_from_hex_color("#ff0000").unwrap();
            assert_eq!((value.red, value.green, value.blue), (255, 0, 0));
        }

        // Invalid.
        {
            let value = RgbColor::try_from_hex_color("#ff000");
            assert_eq!(
                value,
                Err(InvalidHexColor {
                    input: "#ff000".to_string()
                })
            );
        }
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(RgbColor::default(), RgbColor::from_u8(255, 255, 255));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = RgbColor::from_u8(0, 192, 255);
        assert_eq!(color.to_string(), "#00c0ff");
        assert_eq!(RgbColor::from_hex(&color.to_string()), color);
    }

    #[test]
    fn test_crossterm_conversion() {
        let color: crossterm::style::Color = RgbColor::from_u8(1, 2, 3).into();
        assert_eq!(
            color,
            crossterm::style::Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let color = RgbColor::from_hex("#00C0FF");
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#00c0ff\"");
        let decoded: RgbColor = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, color);
    }
}
