// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Widget configuration for the progress bar gauge. Field names and defaults mirror
//! the persisted bajaux progress bar property sheet, so existing configurations keep
//! their meaning.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{GaugeShape, RgbColor};

/// A configured gauge bound. `Auto` means the bound is derived from the incoming
/// point data (facets when present, power-of-ten auto-ranging otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Bound {
    #[default]
    Auto,
    Fixed(f64),
}

impl Bound {
    #[must_use]
    pub fn is_auto(&self) -> bool { matches!(self, Bound::Auto) }
}

/// Persists as `-1` for `Auto`, which is the sentinel existing configurations use.
impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Bound::Auto => serializer.serialize_f64(-1.0),
            Bound::Fixed(value) => serializer.serialize_f64(*value),
        }
    }
}

impl<'de> Deserialize<'de> for Bound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if (value + 1.0).abs() < f64::EPSILON {
            Ok(Bound::Auto)
        } else {
            Ok(Bound::Fixed(value))
        }
    }
}

/// The token in [`GaugeProps::value_text`] / [`GaugeProps::title`] patterns that is
/// replaced with the formatted point value.
pub const VALUE_TOKEN: &str = "%out.value%";

/// Configuration for one gauge widget instance.
///
/// All fields persist; unknown / missing fields fall back to these defaults on load
/// (`#[serde(default)]`), so configs written against older property sheets still
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeProps {
    /// Format pattern for the text shown on the gauge. [`VALUE_TOKEN`] is replaced
    /// with the formatted point value.
    pub value_text: String,
    /// Format pattern for the gauge title.
    pub title: String,
    pub min: Bound,
    pub max: Bound,
    pub shape: GaugeShape,
    /// Interior fill hint. Not used by the terminal renderers; hosts that composite
    /// the gauge over a styled surface consume this.
    pub fill: RgbColor,
    /// Container background hint, same consumption as `fill`.
    pub background: RgbColor,
    pub bar_color: RgbColor,
    pub trail_color: RgbColor,
    pub text_color: RgbColor,
    pub show_text: bool,
    /// Stroke width hint for vector renderers. Carried for persistence
    /// compatibility.
    pub line_width: f64,
    /// Tick count used when the point data does not dictate one.
    pub ticks: u16,
}

impl Default for GaugeProps {
    fn default() -> Self {
        GaugeProps {
            value_text: VALUE_TOKEN.to_string(),
            title: String::new(),
            min: Bound::Auto,
            max: Bound::Auto,
            shape: GaugeShape::default(),
            fill: RgbColor::default(),
            background: RgbColor::default(),
            bar_color: RgbColor::from_u8(0x00, 0xC0, 0xFF),
            trail_color: RgbColor::from_u8(0xf4, 0xf4, 0xf4),
            text_color: RgbColor::from_u8(0x3a, 0x3a, 0x3a),
            show_text: true,
            line_width: 2.1,
            ticks: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults_match_bajaux_property_sheet() {
        let props = GaugeProps::default();
        assert_eq!(props.value_text, "%out.value%");
        assert_eq!(props.title, "");
        assert_eq!(props.min, Bound::Auto);
        assert_eq!(props.max, Bound::Auto);
        assert_eq!(props.shape, GaugeShape::Line);
        assert_eq!(props.fill, RgbColor::from_hex("#fff"));
        assert_eq!(props.background, RgbColor::from_hex("#fff"));
        assert_eq!(props.bar_color, RgbColor::from_hex("#00C0FF"));
        assert_eq!(props.trail_color, RgbColor::from_hex("#f4f4f4"));
        assert_eq!(props.text_color, RgbColor::from_hex("#3a3a3a"));
        assert!(props.show_text);
        assert!((props.line_width - 2.1).abs() < f64::EPSILON);
        assert_eq!(props.ticks, 5);
    }

    #[test]
    fn test_bound_serde_uses_minus_one_sentinel() {
        assert_eq!(serde_json::to_string(&Bound::Auto).unwrap(), "-1.0");
        assert_eq!(
            serde_json::from_str::<Bound>("-1").unwrap(),
            Bound::Auto
        );
        assert_eq!(
            serde_json::from_str::<Bound>("23.5").unwrap(),
            Bound::Fixed(23.5)
        );
    }

    #[test]
    fn test_props_serde_round_trip() {
        let props = GaugeProps {
            min: Bound::Fixed(0.0),
            max: Bound::Fixed(50.0),
            shape: GaugeShape::SemiCircle,
            show_text: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&props).unwrap();
        let decoded: GaugeProps = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, props);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let decoded: GaugeProps =
            serde_json::from_str(r#"{ "shape": "Circle", "min": -1 }"#).unwrap();
        assert_eq!(decoded.shape, GaugeShape::Circle);
        assert_eq!(decoded.min, Bound::Auto);
        assert_eq!(decoded.value_text, "%out.value%");
        assert!(decoded.show_text);
    }
}
