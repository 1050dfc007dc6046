// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// You can get the unicode symbols for the drawings here:
// - <https://symbl.cc/en/unicode/blocks/block-elements/>
// - <https://symbl.cc/en/unicode/blocks/box-drawing/>

//! Glyphs and fixed rasters for the three gauge shapes.
//!
//! The ring rasters are fixed-size templates: each segment is a `(row, col, glyph)`
//! triple, and the segment arrays are ordered in fill direction, so a renderer colors
//! the first `n` entries with the bar color and the rest with the trail color.

/// A fully filled line gauge cell.
pub const FULL_BLOCK_GLYPH: char = '█';

/// The unfilled remainder of a line gauge.
pub const LINE_TRAIL_GLYPH: char = '─';

/// Partial fill glyphs for the line gauge boundary cell, indexed by eighths. Index 0
/// is unused (an empty boundary cell renders the trail glyph instead).
pub const EIGHTH_BLOCK_GLYPHS: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// Width in display columns of the circle / semi circle rasters.
pub const RING_RASTER_WIDTH: usize = 8;

/// Rows in the circle raster.
pub const CIRCLE_RASTER_HEIGHT: usize = 5;

/// Ring segments for the circle gauge, clockwise from 12 o'clock.
pub const CIRCLE_SEGMENTS: [(usize, usize, char); 14] = [
    (0, 4, '─'),
    (0, 5, '╮'),
    (1, 6, '╲'),
    (2, 6, '│'),
    (3, 6, '╱'),
    (4, 5, '╯'),
    (4, 4, '─'),
    (4, 3, '─'),
    (4, 2, '╰'),
    (3, 1, '╲'),
    (2, 1, '│'),
    (1, 1, '╱'),
    (0, 2, '╭'),
    (0, 3, '─'),
];

/// Rows in the semi circle raster.
pub const SEMI_CIRCLE_RASTER_HEIGHT: usize = 3;

/// Arc segments for the semi circle gauge, clockwise from 9 o'clock.
pub const SEMI_CIRCLE_SEGMENTS: [(usize, usize, char); 10] = [
    (2, 0, '─'),
    (2, 1, '╯'),
    (1, 1, '╱'),
    (0, 2, '╭'),
    (0, 3, '─'),
    (0, 4, '─'),
    (0, 5, '╮'),
    (1, 6, '╲'),
    (2, 6, '╰'),
    (2, 7, '─'),
];

/// Row of the ring rasters that holds the centered value text.
pub const RING_TEXT_ROW: usize = 2;

/// First interior column of the text area in the ring rasters.
pub const RING_TEXT_COL_START: usize = 2;

/// Interior columns available for text in the ring rasters.
pub const RING_TEXT_COL_COUNT: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_stay_inside_their_rasters() {
        for (row, col, _) in CIRCLE_SEGMENTS {
            assert!(row < CIRCLE_RASTER_HEIGHT);
            assert!(col < RING_RASTER_WIDTH);
        }
        for (row, col, _) in SEMI_CIRCLE_SEGMENTS {
            assert!(row < SEMI_CIRCLE_RASTER_HEIGHT);
            assert!(col < RING_RASTER_WIDTH);
        }
    }

    #[test]
    fn test_segments_do_not_overlap_the_text_area() {
        let text_cols = RING_TEXT_COL_START..RING_TEXT_COL_START + RING_TEXT_COL_COUNT;
        for (row, col, _) in CIRCLE_SEGMENTS {
            assert!(!(row == RING_TEXT_ROW && text_cols.contains(&col)));
        }
        for (row, col, _) in SEMI_CIRCLE_SEGMENTS {
            assert!(!(row == RING_TEXT_ROW && text_cols.contains(&col)));
        }
    }

    #[test]
    fn test_segment_positions_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (row, col, _) in CIRCLE_SEGMENTS {
            assert!(seen.insert((row, col)));
        }
        seen.clear();
        for (row, col, _) in SEMI_CIRCLE_SEGMENTS {
            assert!(seen.insert((row, col)));
        }
    }
}
