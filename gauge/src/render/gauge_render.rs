// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure renderers from `(props, data, width)` to a [`GaugeSurface`]. No terminal
//! state is touched here; callers decide where painted frames go.
//!
//! The bar color comes from the point status when it is unhealthy (see
//! [`StatusFlags::color`]), otherwise from the configured
//! [`GaugeProps::bar_color`].
//!
//! [`StatusFlags::color`]: crate::StatusFlags::color

use unicode_width::UnicodeWidthChar;

use crate::{GaugeData, GaugeProps, GaugeShape, GaugeSurface, InlineVec, PixCell,
            RgbColor, CIRCLE_RASTER_HEIGHT, CIRCLE_SEGMENTS, EIGHTH_BLOCK_GLYPHS,
            FULL_BLOCK_GLYPH, LINE_TRAIL_GLYPH, RING_RASTER_WIDTH, RING_TEXT_COL_COUNT,
            RING_TEXT_COL_START, RING_TEXT_ROW, SEMI_CIRCLE_RASTER_HEIGHT,
            SEMI_CIRCLE_SEGMENTS};

/// Render one frame, dispatching on the configured shape. `arg_display_width` is
/// only meaningful for [`GaugeShape::Line`]; the ring shapes have fixed rasters.
#[must_use]
pub fn render_gauge(
    arg_props: &GaugeProps,
    arg_data: &GaugeData,
    arg_display_width: usize,
) -> GaugeSurface {
    match arg_props.shape {
        GaugeShape::Line => render_line(arg_props, arg_data, arg_display_width),
        GaugeShape::Circle => render_ring(
            arg_props,
            arg_data,
            CIRCLE_RASTER_HEIGHT,
            &CIRCLE_SEGMENTS,
        ),
        GaugeShape::SemiCircle => render_ring(
            arg_props,
            arg_data,
            SEMI_CIRCLE_RASTER_HEIGHT,
            &SEMI_CIRCLE_SEGMENTS,
        ),
    }
}

fn bar_color(arg_props: &GaugeProps, arg_data: &GaugeData) -> RgbColor {
    arg_data.status_color.unwrap_or(arg_props.bar_color)
}

/// Truncate `text` to at most `max_width` display columns.
fn truncate_to_width(text: &str, max_width: usize) -> InlineVec<char> {
    let mut acc: InlineVec<char> = InlineVec::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        used += ch_width;
        acc.push(ch);
    }
    acc
}

/// Horizontal bar: filled cells, one fractional boundary cell (eighth blocks), and a
/// trail. Value text is overlaid centered when `show_text` is on.
#[must_use]
pub fn render_line(
    arg_props: &GaugeProps,
    arg_data: &GaugeData,
    arg_display_width: usize,
) -> GaugeSurface {
    let width = arg_display_width.max(1);
    let fill = bar_color(arg_props, arg_data);

    // Quantize the ratio into eighths of a cell.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation,
            clippy::cast_sign_loss)]
    let total_eighths =
        (arg_data.progress_ratio() * (width * 8) as f64).round() as usize;
    let full_cells = total_eighths / 8;
    let remainder_eighths = total_eighths % 8;

    let mut surface = GaugeSurface::new_filled(width, 1, arg_props.trail_color);
    for col in 0..width {
        let cell = if col < full_cells {
            PixCell::new(FULL_BLOCK_GLYPH, fill)
        } else if col == full_cells && remainder_eighths > 0 {
            PixCell::new(EIGHTH_BLOCK_GLYPHS[remainder_eighths], fill)
        } else {
            PixCell::new(LINE_TRAIL_GLYPH, arg_props.trail_color)
        };
        surface.set(0, col, cell);
    }

    if arg_props.show_text {
        overlay_text(&mut surface, arg_props, arg_data, 0, 0, width);
    }
    surface
}

fn render_ring(
    arg_props: &GaugeProps,
    arg_data: &GaugeData,
    raster_height: usize,
    segments: &[(usize, usize, char)],
) -> GaugeSurface {
    let fill = bar_color(arg_props, arg_data);

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation,
            clippy::cast_sign_loss)]
    let filled_count =
        (arg_data.progress_ratio() * segments.len() as f64).round() as usize;

    let mut surface =
        GaugeSurface::new_filled(RING_RASTER_WIDTH, raster_height, arg_props.trail_color);
    for (index, (row, col, glyph)) in segments.iter().enumerate() {
        let color = if index < filled_count {
            fill
        } else {
            arg_props.trail_color
        };
        surface.set(*row, *col, PixCell::new(*glyph, color));
    }

    if arg_props.show_text {
        overlay_text(
            &mut surface,
            arg_props,
            arg_data,
            RING_TEXT_ROW,
            RING_TEXT_COL_START,
            RING_TEXT_COL_COUNT,
        );
    }
    surface
}

/// Write the value text centered into `area_width` cells starting at
/// `(row, col_start)`, truncating to fit.
fn overlay_text(
    surface: &mut GaugeSurface,
    arg_props: &GaugeProps,
    arg_data: &GaugeData,
    row: usize,
    col_start: usize,
    area_width: usize,
) {
    let chars = truncate_to_width(&arg_data.value_text, area_width);
    let text_width: usize = chars.iter().map(|ch| ch.width().unwrap_or(0)).sum();
    if text_width == 0 {
        return;
    }

    let mut col = col_start + (area_width - text_width) / 2;
    for ch in chars {
        surface.set(row, col, PixCell::new(ch, arg_props.text_color));
        col += ch.width().unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{resolve_data, AutoRange, Bound, PointSample, RgbColor, StatusFlags,
                STATUS_ALARM_COLOR};

    fn props_without_text(shape: GaugeShape) -> GaugeProps {
        GaugeProps {
            shape,
            show_text: false,
            min: Bound::Fixed(0.0),
            max: Bound::Fixed(100.0),
            ..Default::default()
        }
    }

    fn data_for(value: f64, props: &GaugeProps) -> crate::GaugeData {
        let mut range = AutoRange::default();
        resolve_data(props, &PointSample::numeric(value), &mut range)
    }

    fn count_cells(surface: &GaugeSurface, glyph: char) -> usize {
        surface
            .rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.glyph == glyph)
            .count()
    }

    fn count_colored(surface: &GaugeSurface, color: RgbColor) -> usize {
        surface
            .rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.glyph != ' ' && cell.fg_color == color)
            .count()
    }

    #[test_case(0.0, 0; "empty bar")]
    #[test_case(50.0, 5; "half bar")]
    #[test_case(100.0, 10; "full bar")]
    fn test_line_fill_cell_counts(value: f64, expected_full_cells: usize) {
        let props = props_without_text(GaugeShape::Line);
        let data = data_for(value, &props);

        let surface = render_line(&props, &data, 10);
        assert_eq!(surface.rows.len(), 1);
        assert_eq!(surface.rows[0].len(), 10);
        assert_eq!(count_cells(&surface, FULL_BLOCK_GLYPH), expected_full_cells);
    }

    #[test]
    fn test_line_fractional_boundary_cell() {
        let props = props_without_text(GaugeShape::Line);
        // 25% of 10 cells = 2.5 cells = 2 full + 4 eighths.
        let data = data_for(25.0, &props);

        let surface = render_line(&props, &data, 10);
        assert_eq!(count_cells(&surface, FULL_BLOCK_GLYPH), 2);
        assert_eq!(count_cells(&surface, EIGHTH_BLOCK_GLYPHS[4]), 1);
        assert_eq!(count_cells(&surface, LINE_TRAIL_GLYPH), 7);
    }

    #[test]
    fn test_line_text_overlay_shown_and_hidden() {
        let data = {
            let props = props_without_text(GaugeShape::Line);
            data_for(50.0, &props)
        };

        let shown = GaugeProps {
            show_text: true,
            ..props_without_text(GaugeShape::Line)
        };
        let surface = render_gauge(&shown, &data, 20);
        assert!(surface.to_plain_string().contains("50.00"));

        let hidden = props_without_text(GaugeShape::Line);
        let surface = render_gauge(&hidden, &data, 20);
        assert!(!surface.to_plain_string().contains("50.00"));
    }

    #[test]
    fn test_line_zero_width_clamps_to_one_cell() {
        let props = props_without_text(GaugeShape::Line);
        let data = data_for(100.0, &props);
        let surface = render_line(&props, &data, 0);
        assert_eq!(surface.rows[0].len(), 1);
    }

    #[test_case(0.0, 0; "empty ring")]
    #[test_case(50.0, 7; "half ring")]
    #[test_case(100.0, 14; "full ring")]
    fn test_circle_filled_segment_counts(value: f64, expected: usize) {
        let props = props_without_text(GaugeShape::Circle);
        let data = data_for(value, &props);

        let surface = render_gauge(&props, &data, 0);
        assert_eq!(surface.rows.len(), CIRCLE_RASTER_HEIGHT);
        assert_eq!(count_colored(&surface, props.bar_color), expected);
        assert_eq!(
            count_colored(&surface, props.trail_color),
            CIRCLE_SEGMENTS.len() - expected
        );
    }

    #[test_case(0.0, 0; "empty arc")]
    #[test_case(50.0, 5; "half arc")]
    #[test_case(100.0, 10; "full arc")]
    fn test_semi_circle_filled_segment_counts(value: f64, expected: usize) {
        let props = props_without_text(GaugeShape::SemiCircle);
        let data = data_for(value, &props);

        let surface = render_gauge(&props, &data, 0);
        assert_eq!(surface.rows.len(), SEMI_CIRCLE_RASTER_HEIGHT);
        assert_eq!(count_colored(&surface, props.bar_color), expected);
    }

    #[test]
    fn test_ring_text_is_truncated_to_interior() {
        let props = GaugeProps {
            show_text: true,
            ..props_without_text(GaugeShape::Circle)
        };
        let data = data_for(50.0, &props);

        let surface = render_gauge(&props, &data, 0);
        let plain = surface.to_plain_string();
        // "50.00" does not fit in the 4 cell interior; "50.0" does.
        assert!(plain.contains("50.0"));
        assert!(!plain.contains("50.00"));
    }

    #[test]
    fn test_status_color_overrides_bar_color() {
        let props = props_without_text(GaugeShape::Line);
        let mut range = AutoRange::default();
        let sample = PointSample {
            status: StatusFlags {
                alarm: true,
                ..Default::default()
            },
            ..PointSample::numeric(50.0)
        };
        let data = resolve_data(&props, &sample, &mut range);

        let surface = render_gauge(&props, &data, 10);
        assert_eq!(count_colored(&surface, STATUS_ALARM_COLOR), 5);
        assert_eq!(count_colored(&surface, props.bar_color), 0);
    }

    #[test]
    fn test_null_value_renders_empty_gauge() {
        let props = props_without_text(GaugeShape::Line);
        let mut range = AutoRange::default();
        let sample = PointSample {
            status: StatusFlags {
                null: true,
                ..Default::default()
            },
            ..PointSample::numeric(50.0)
        };
        let data = resolve_data(&props, &sample, &mut range);

        let surface = render_gauge(&props, &data, 10);
        assert_eq!(count_cells(&surface, FULL_BLOCK_GLYPH), 0);
        assert_eq!(count_cells(&surface, LINE_TRAIL_GLYPH), 10);
    }
}
