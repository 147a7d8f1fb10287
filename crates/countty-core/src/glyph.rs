//! Glyph rasterization: one pixel row of one character into terminal cells.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};

use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Writes one painted cell: a reverse-video space.
///
/// Highlighted cells are additionally bold with a red foreground. The
/// attributes are reset right after the cell so plain cells that follow stay
/// unstyled.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn paint_cell<W: Write>(out: &mut W, highlight: bool) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reverse))?;
    if highlight {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::DarkRed)
        )?;
    }
    queue!(out, Print(' '), SetAttribute(Attribute::Reset))
}

/// Writes `count` unstyled cells.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn blank_cells<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    write!(out, "{:count$}", "")
}

/// Rasterizes pixel row `row` of `ch` as exactly [`GLYPH_WIDTH`] cells.
///
/// Characters missing from the font render as a solid block.
///
/// # Panics
/// Panics if `row >= GLYPH_HEIGHT`. The layout never asks for such a row, so
/// this is a bug in the caller rather than a runtime condition.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render_row<W: Write>(out: &mut W, ch: char, row: usize, highlight: bool) -> io::Result<()> {
    assert!(
        row < GLYPH_HEIGHT,
        "glyph row {row} out of range (glyph height is {GLYPH_HEIGHT})"
    );

    let glyph = font::glyph_or_block(ch);
    for column in 0..GLYPH_WIDTH {
        if glyph.is_set(row, column) {
            paint_cell(out, highlight)?;
        } else {
            blank_cells(out, 1)?;
        }
    }
    Ok(())
}
