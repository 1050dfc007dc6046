// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The render target for gauge frames: a small grid of colored glyph cells.
//! Renderers build the grid; [`GaugeSurface::paint`] turns it into an ANSI string
//! (runs of same-colored cells share one escape sequence), and
//! [`GaugeSurface::to_plain_string`] drops color for logs and tests.

use std::fmt::Write as _;

use crossterm::style::{ResetColor, SetForegroundColor};

use crate::{InlineString, InlineVec, RgbColor};

/// One display cell: a glyph and its foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixCell {
    pub glyph: char,
    pub fg_color: RgbColor,
}

impl PixCell {
    #[must_use]
    pub fn new(glyph: char, fg_color: RgbColor) -> PixCell { PixCell { glyph, fg_color } }
}

/// One rendered gauge frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GaugeSurface {
    pub rows: InlineVec<InlineVec<PixCell>>,
}

impl GaugeSurface {
    /// A surface of `height` rows by `width` cols filled with spaces.
    #[must_use]
    pub fn new_filled(width: usize, height: usize, fg_color: RgbColor) -> GaugeSurface {
        let row: InlineVec<PixCell> =
            std::iter::repeat_n(PixCell::new(' ', fg_color), width).collect();
        GaugeSurface {
            rows: std::iter::repeat_n(row, height).collect(),
        }
    }

    /// Set one cell. Out of bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: PixCell) {
        if let Some(cells) = self.rows.get_mut(row)
            && let Some(slot) = cells.get_mut(col)
        {
            *slot = cell;
        }
    }

    /// Paint the surface into an ANSI string. Adjacent cells with the same color
    /// share one escape sequence; each row ends with a color reset.
    #[must_use]
    pub fn paint(&self) -> InlineString {
        let mut acc = InlineString::new();
        for (row_index, row) in self.rows.iter().enumerate() {
            let mut current_color: Option<RgbColor> = None;
            for cell in row {
                if current_color != Some(cell.fg_color) {
                    // We don't care about the result of this operation.
                    write!(&mut acc, "{}", SetForegroundColor(cell.fg_color.into())).ok();
                    current_color = Some(cell.fg_color);
                }
                acc.push(cell.glyph);
            }
            // We don't care about the result of this operation.
            write!(&mut acc, "{}", ResetColor).ok();
            if row_index + 1 < self.rows.len() {
                acc.push('\n');
            }
        }
        acc
    }

    /// The glyphs only, without any color escape sequences.
    #[must_use]
    pub fn to_plain_string(&self) -> InlineString {
        let mut acc = InlineString::new();
        for (row_index, row) in self.rows.iter().enumerate() {
            for cell in row {
                acc.push(cell.glyph);
            }
            if row_index + 1 < self.rows.len() {
                acc.push('\n');
            }
        }
        acc
    }
}
