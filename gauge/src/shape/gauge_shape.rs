// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The frozen enumeration selecting a gauge's visual shape.
//!
//! The variant set is closed: three variants, totally ordered by ordinal, with a
//! designated default. Both identities are stable and serve as the persisted forms:
//!
//! | Variant      | Ordinal | Tag            |
//! | :----------- | :------ | :------------- |
//! | `Line`       | 0       | `"Line"`       |
//! | `Circle`     | 1       | `"Circle"`     |
//! | `SemiCircle` | 2       | `"SemiCircle"` |
//!
//! The ordinal numbering is a backward compatibility contract for persisted
//! configuration and must never change.

use std::str::FromStr;

use serde::{de::{self, Visitor},
            Deserialize, Deserializer, Serialize, Serializer};
use strum::VariantArray;

use crate::UnknownVariant;

/// Visual shape of the progress bar gauge. Immutable, [`Copy`], safe to share across
/// any number of concurrent readers.
#[derive(Debug,
         Clone,
         Copy,
         PartialEq,
         Eq,
         PartialOrd,
         Ord,
         Hash,
         Default,
         strum_macros::Display,
         strum_macros::EnumCount,
         strum_macros::VariantArray)]
pub enum GaugeShape {
    /// Horizontal bar. The default shape (ordinal 0).
    #[default]
    Line,
    /// Full ring (ordinal 1).
    Circle,
    /// Upper half ring (ordinal 2).
    SemiCircle,
}

impl GaugeShape {
    /// Look up the variant whose ordinal equals `arg_ordinal`.
    ///
    /// # Errors
    ///
    /// [`UnknownVariant::Ordinal`] if the ordinal is outside the closed range.
    pub fn from_ordinal(arg_ordinal: i64) -> Result<GaugeShape, UnknownVariant> {
        usize::try_from(arg_ordinal)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index))
            .copied()
            .ok_or(UnknownVariant::Ordinal {
                ordinal: arg_ordinal,
            })
    }

    /// Look up the variant whose tag equals `arg_tag`. The match is exact and case
    /// sensitive, matching the persisted tag convention.
    ///
    /// # Errors
    ///
    /// [`UnknownVariant::Tag`] if no variant has this tag.
    pub fn from_tag(arg_tag: impl AsRef<str>) -> Result<GaugeShape, UnknownVariant> {
        let tag = arg_tag.as_ref();
        Self::VARIANTS
            .iter()
            .find(|variant| variant.tag() == tag)
            .copied()
            .ok_or_else(|| UnknownVariant::Tag {
                tag: tag.to_string(),
            })
    }

    /// Stable ordinal position of this variant in the closed set.
    #[must_use]
    pub fn ordinal(&self) -> u8 { *self as u8 }

    /// Stable symbolic name of this variant.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            GaugeShape::Line => "Line",
            GaugeShape::Circle => "Circle",
            GaugeShape::SemiCircle => "SemiCircle",
        }
    }
}

impl FromStr for GaugeShape {
    type Err = UnknownVariant;

    fn from_str(input: &str) -> Result<Self, Self::Err> { GaugeShape::from_tag(input) }
}

/// Persists as the tag string (display / config form).
impl Serialize for GaugeShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Accepts either persisted form: the tag string, or the ordinal integer (compact
/// form).
impl<'de> Deserialize<'de> for GaugeShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShapeVisitor;

        impl Visitor<'_> for ShapeVisitor {
            type Value = GaugeShape;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a gauge shape tag string or ordinal integer")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                GaugeShape::from_tag(value).map_err(de::Error::custom)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                GaugeShape::from_ordinal(value).map_err(de::Error::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                let ordinal = i64::try_from(value).unwrap_or(i64::MAX);
                GaugeShape::from_ordinal(ordinal).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(ShapeVisitor)
    }
}
