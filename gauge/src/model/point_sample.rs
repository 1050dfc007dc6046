// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A snapshot of a subscribed point, as delivered by whatever host plumbing feeds the
//! gauge: the current value, the point status, and the point's facets (display
//! metadata).

use crate::{InlineString, RgbColor};

/// One entry in an enum point's range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub ordinal: i32,
    pub display_tag: InlineString,
}

impl EnumEntry {
    #[must_use]
    pub fn new(ordinal: i32, display_tag: impl AsRef<str>) -> EnumEntry {
        EnumEntry {
            ordinal,
            display_tag: display_tag.as_ref().into(),
        }
    }
}

/// The current value of a subscribed point.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PointValue {
    /// No value (eg: the point has never been written, or its status is null).
    #[default]
    Null,
    Numeric(f64),
    Boolean(bool),
    /// An enum point: the active ordinal plus the point's full range. The gauge maps
    /// the ordinal to its index within the range.
    Enum {
        ordinal: i32,
        range: Vec<EnumEntry>,
    },
}

/// Display metadata carried by the point (min/max, units, precision, boolean texts).
/// Every field is optional; absent fields fall back to gauge defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointFacets {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub units: Option<InlineString>,
    /// Decimal places for the formatted value text.
    pub precision: Option<u8>,
    pub true_text: Option<InlineString>,
    pub false_text: Option<InlineString>,
}

/// Point status bits, in precedence order. [`StatusFlags::color`] maps the highest
/// priority set bit to its well known status color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    pub disabled: bool,
    pub fault: bool,
    pub down: bool,
    pub alarm: bool,
    pub stale: bool,
    pub overridden: bool,
    /// A null status means the value itself is meaningless and must not render.
    pub null: bool,
}

/// Well known bajaux status colors.
pub const STATUS_DISABLED_COLOR: RgbColor = RgbColor { red: 0xd6, green: 0xcb, blue: 0xae };
pub const STATUS_FAULT_COLOR: RgbColor = RgbColor { red: 0xfb, green: 0x77, blue: 0x34 };
pub const STATUS_DOWN_COLOR: RgbColor = RgbColor { red: 0xfa, green: 0xc6, blue: 0x00 };
pub const STATUS_ALARM_COLOR: RgbColor = RgbColor { red: 0xce, green: 0x16, blue: 0x24 };
pub const STATUS_STALE_COLOR: RgbColor = RgbColor { red: 0xa5, green: 0x9d, blue: 0x86 };
pub const STATUS_OVERRIDDEN_COLOR: RgbColor = RgbColor { red: 0xbf, green: 0xad, blue: 0xdc };

impl StatusFlags {
    /// A healthy status: no bits set.
    #[must_use]
    pub fn ok() -> StatusFlags { StatusFlags::default() }

    /// The status color for the highest priority set bit, if any. Precedence:
    /// disabled, fault, down, alarm, stale, overridden.
    #[must_use]
    pub fn color(&self) -> Option<RgbColor> {
        if self.disabled {
            Some(STATUS_DISABLED_COLOR)
        } else if self.fault {
            Some(STATUS_FAULT_COLOR)
        } else if self.down {
            Some(STATUS_DOWN_COLOR)
        } else if self.alarm {
            Some(STATUS_ALARM_COLOR)
        } else if self.stale {
            Some(STATUS_STALE_COLOR)
        } else if self.overridden {
            Some(STATUS_OVERRIDDEN_COLOR)
        } else {
            None
        }
    }
}

/// A snapshot of a subscribed point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSample {
    pub value: PointValue,
    pub status: StatusFlags,
    pub facets: Option<PointFacets>,
}

impl PointSample {
    /// A healthy numeric sample with no facets.
    #[must_use]
    pub fn numeric(value: f64) -> PointSample {
        PointSample {
            value: PointValue::Numeric(value),
            ..Default::default()
        }
    }

    /// A healthy boolean sample with no facets.
    #[must_use]
    pub fn boolean(value: bool) -> PointSample {
        PointSample {
            value: PointValue::Boolean(value),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_status_color_precedence() {
        let all_set = StatusFlags {
            disabled: true,
            fault: true,
            down: true,
            alarm: true,
            stale: true,
            overridden: true,
            null: false,
        };
        assert_eq!(all_set.color(), Some(STATUS_DISABLED_COLOR));

        let fault_and_alarm = StatusFlags {
            fault: true,
            alarm: true,
            ..Default::default()
        };
        assert_eq!(fault_and_alarm.color(), Some(STATUS_FAULT_COLOR));

        let alarm_only = StatusFlags {
            alarm: true,
            ..Default::default()
        };
        assert_eq!(alarm_only.color(), Some(STATUS_ALARM_COLOR));

        assert_eq!(StatusFlags::ok().color(), None);
    }

    #[test]
    fn test_status_colors_match_bajaux_palette() {
        assert_eq!(STATUS_DISABLED_COLOR, RgbColor::from_hex("#d6cbae"));
        assert_eq!(STATUS_FAULT_COLOR, RgbColor::from_hex("#fb7734"));
        assert_eq!(STATUS_DOWN_COLOR, RgbColor::from_hex("#fac600"));
        assert_eq!(STATUS_ALARM_COLOR, RgbColor::from_hex("#ce1624"));
        assert_eq!(STATUS_STALE_COLOR, RgbColor::from_hex("#a59d86"));
        assert_eq!(STATUS_OVERRIDDEN_COLOR, RgbColor::from_hex("#bfaddc"));
    }

    #[test]
    fn test_sample_constructors() {
        assert_eq!(
            PointSample::numeric(42.0).value,
            PointValue::Numeric(42.0)
        );
        assert_eq!(
            PointSample::boolean(true).value,
            PointValue::Boolean(true)
        );
        assert_eq!(PointSample::default().value, PointValue::Null);
    }
}
