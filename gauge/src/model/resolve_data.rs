// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Resolves a [`PointSample`] plus [`GaugeProps`] into the flat [`GaugeData`] a
//! renderer consumes. Pure and synchronous; the only state that persists between
//! calls is [`AutoRange`], the widget's remembered auto-range bounds.
//!
//! Bound precedence, matching the bajaux live point model: a fixed configured bound always
//! wins; otherwise facets supply the bound (with 0 / 100 defaults); otherwise the
//! bound grows in power-of-ten steps until it brackets the value.

use crate::{inline_string, Bound, GaugeProps, InlineString, PointFacets, PointSample,
            PointValue, RgbColor, VALUE_TOKEN};

/// Default decimal places for the formatted value text.
pub const DEFAULT_PRECISION: u8 = 2;

/// Placeholder rendered when the point has no value.
pub const NULL_VALUE_TEXT: &str = "-";

/// Remembered auto-range bounds for one gauge widget. Auto bounds only ever grow
/// while the subscription source stays the same; replacing the source resets them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AutoRange {
    pub last_min: Option<f64>,
    pub last_max: Option<f64>,
}

impl AutoRange {
    pub fn reset(&mut self) { *self = AutoRange::default(); }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeData {
    pub min: f64,
    pub max: f64,
    /// `None` when the point is null (or its status is null); renders as an empty
    /// gauge.
    pub value: Option<f64>,
    pub ticks: u16,
    /// Labels for discrete points (boolean / enum); empty for numeric points.
    pub display_tags: Vec<InlineString>,
    pub value_text: InlineString,
    pub title: InlineString,
    /// Bar color override for an unhealthy point status.
    pub status_color: Option<RgbColor>,
    pub precision: u8,
    pub units: Option<InlineString>,
}

impl GaugeData {
    /// Fraction of the gauge that is filled, in `[0, 1]`. A null value or a
    /// degenerate span renders as empty.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        let Some(value) = self.value else {
            return 0.0;
        };
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// The power-of-ten step used to grow an auto bound toward `value`. For example 65
/// steps by 10, 650 steps by 100. Small and zero magnitudes step by 10 (the lowest
/// factor).
#[must_use]
pub fn power_factor(value: f64) -> f64 {
    let exponent = value.abs().log10().floor();
    if !exponent.is_finite() || exponent < 1.0 {
        10.0
    } else {
        10f64.powf(exponent)
    }
}

fn auto_min(value: f64, last_min: Option<f64>) -> f64 {
    let mut min = last_min.unwrap_or(0.0);
    let factor = power_factor(value);

    if min > value {
        min = 0.0;
    }

    if value == 0.0 {
        return 0.0;
    }

    while min >= value {
        min -= factor;
        min = (min * factor).round() / factor;
    }
    min
}

fn auto_max(value: f64, last_max: Option<f64>) -> f64 {
    let mut max = last_max.unwrap_or(0.0);
    let factor = power_factor(value);

    if max < value {
        max = 0.0;
    }

    while max <= value {
        max += factor;
        max = (max * factor).round() / factor;
    }
    max
}

/// Replace every [`VALUE_TOKEN`] in the pattern with the rendered value.
fn format_pattern(pattern: &str, rendered_value: &str) -> InlineString {
    if pattern.contains(VALUE_TOKEN) {
        pattern.replace(VALUE_TOKEN, rendered_value).into()
    } else {
        pattern.into()
    }
}

fn format_numeric(value: f64, precision: u8, units: Option<&InlineString>) -> InlineString {
    let precision = precision as usize;
    match units {
        Some(units) => inline_string!("{value:.precision$} {units}"),
        None => inline_string!("{value:.precision$}"),
    }
}

/// Resolve one frame of gauge data.
///
/// `arg_range` is the widget's remembered auto-range; it is updated in place when a
/// numeric value forces an auto bound to grow.
#[must_use]
pub fn resolve_data(
    arg_props: &GaugeProps,
    arg_sample: &PointSample,
    arg_range: &mut AutoRange,
) -> GaugeData {
    let facets = arg_sample.facets.as_ref();
    let precision = facets
        .and_then(|it| it.precision)
        .unwrap_or(DEFAULT_PRECISION);
    let units = facets.and_then(|it| it.units.clone());
    let status_color = arg_sample.status.color();

    // A null status means the value itself must not render.
    let point_value = if arg_sample.status.null {
        &PointValue::Null
    } else {
        &arg_sample.value
    };

    let (min, max, value, ticks, display_tags, rendered_value) = match point_value {
        PointValue::Boolean(flag) => resolve_boolean(facets, *flag),
        PointValue::Enum { ordinal, range } => resolve_enum(*ordinal, range),
        PointValue::Numeric(raw) => {
            resolve_numeric(arg_props, facets, *raw, arg_range, precision, units.as_ref())
        }
        PointValue::Null => resolve_null(arg_props, facets, arg_range),
    };

    let data = GaugeData {
        min,
        max,
        value,
        ticks,
        display_tags,
        value_text: format_pattern(&arg_props.value_text, &rendered_value),
        title: format_pattern(&arg_props.title, &rendered_value),
        status_color,
        precision,
        units,
    };
    tracing::debug!(
        min = data.min,
        max = data.max,
        value = ?data.value,
        ratio = data.progress_ratio(),
        "resolved gauge data"
    );
    data
}

type Resolved = (
    f64,
    f64,
    Option<f64>,
    u16,
    Vec<InlineString>,
    InlineString,
);

fn resolve_boolean(facets: Option<&PointFacets>, flag: bool) -> Resolved {
    let false_tag: InlineString = facets
        .and_then(|it| it.false_text.clone())
        .unwrap_or_else(|| "false".into());
    let true_tag: InlineString = facets
        .and_then(|it| it.true_text.clone())
        .unwrap_or_else(|| "true".into());
    let rendered = if flag { true_tag.clone() } else { false_tag.clone() };
    (
        0.0,
        1.0,
        Some(if flag { 1.0 } else { 0.0 }),
        2,
        vec![false_tag, true_tag],
        rendered,
    )
}

fn resolve_enum(ordinal: i32, range: &[crate::EnumEntry]) -> Resolved {
    let display_tags: Vec<InlineString> = range
        .iter()
        .map(|entry| entry.display_tag.clone())
        .collect();
    let position = range
        .iter()
        .position(|entry| entry.ordinal == ordinal)
        .map(|index| index as f64);
    let rendered = match range.iter().find(|entry| entry.ordinal == ordinal) {
        Some(entry) => entry.display_tag.clone(),
        None => inline_string!("{ordinal}"),
    };
    let count = range.len();
    let max = if count == 0 { 0.0 } else { (count - 1) as f64 };
    let ticks = u16::try_from(count).unwrap_or(u16::MAX);
    (0.0, max, position, ticks, display_tags, rendered)
}

fn resolve_numeric(
    arg_props: &GaugeProps,
    facets: Option<&PointFacets>,
    raw: f64,
    arg_range: &mut AutoRange,
    precision: u8,
    units: Option<&InlineString>,
) -> Resolved {
    let min = match (arg_props.min, facets) {
        (Bound::Fixed(bound), _) => bound,
        (Bound::Auto, Some(facets)) => facets.min.unwrap_or(0.0),
        (Bound::Auto, None) => {
            let grown = auto_min(raw, arg_range.last_min);
            arg_range.last_min = Some(grown);
            grown
        }
    };
    let max = match (arg_props.max, facets) {
        (Bound::Fixed(bound), _) => bound,
        (Bound::Auto, Some(facets)) => facets.max.unwrap_or(100.0),
        (Bound::Auto, None) => {
            let grown = auto_max(raw, arg_range.last_max);
            arg_range.last_max = Some(grown);
            grown
        }
    };

    // Fixed bounds clamp the value into range.
    let value = raw.clamp(min.min(max), max.max(min));
    let rendered = format_numeric(value, precision, units);
    (min, max, Some(value), arg_props.ticks, Vec::new(), rendered)
}

fn resolve_null(
    arg_props: &GaugeProps,
    facets: Option<&PointFacets>,
    arg_range: &AutoRange,
) -> Resolved {
    let min = match arg_props.min {
        Bound::Fixed(value) => value,
        Bound::Auto => facets
            .and_then(|it| it.min)
            .or(arg_range.last_min)
            .unwrap_or(0.0),
    };
    let max = match arg_props.max {
        Bound::Fixed(value) => value,
        Bound::Auto => facets
            .and_then(|it| it.max)
            .or(arg_range.last_max)
            .unwrap_or(100.0),
    };
    (
        min,
        max,
        None,
        arg_props.ticks,
        Vec::new(),
        NULL_VALUE_TEXT.into(),
    )
}
