//! Centers rendered text in the terminal and paints whole frames.
//!
//! Frames are drawn over the previous one starting from the home position
//! instead of clearing the screen, so every cell of the terminal is written on
//! each frame. Padding is what erases pixels left over from a wider or taller
//! previous frame.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};

use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::glyph;

/// Blank rows between two lines of text.
pub const LINE_SPACING: usize = 2;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub cols: u16,
    pub rows: u16,
}

impl Geometry {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

/// Padding around a block of content along one axis.
///
/// The odd remainder goes to the trailing side. Content larger than the
/// screen yields zero padding rather than a negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub leading: usize,
    pub trailing: usize,
}

impl Padding {
    pub fn center(available: usize, content: usize) -> Self {
        let leading = available.saturating_sub(content) / 2;
        let trailing = available.saturating_sub(leading + content);
        Self { leading, trailing }
    }
}

/// Height in rows of `line_count` lines of glyphs including the spacers.
pub fn content_height(line_count: usize) -> usize {
    line_count * GLYPH_HEIGHT + line_count.saturating_sub(1) * LINE_SPACING
}

/// Width in columns of a line of `char_count` glyphs.
pub fn line_width(char_count: usize) -> usize {
    char_count * GLYPH_WIDTH
}

fn blank_rows<W: Write>(out: &mut W, count: usize, cols: usize) -> io::Result<()> {
    for _ in 0..count {
        glyph::blank_cells(out, cols)?;
    }
    Ok(())
}

/// Renders `lines` centered in a screen of size `geometry`.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render_frame<W, S>(
    out: &mut W,
    lines: &[S],
    highlight: bool,
    geometry: Geometry,
) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let cols = usize::from(geometry.cols);
    let vertical = Padding::center(usize::from(geometry.rows), content_height(lines.len()));

    queue!(out, MoveTo(0, 0))?;
    blank_rows(out, vertical.leading, cols)?;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let horizontal = Padding::center(cols, line_width(line.chars().count()));

        for row in 0..GLYPH_HEIGHT {
            glyph::blank_cells(out, horizontal.leading)?;
            for ch in line.chars() {
                glyph::render_row(out, ch, row, highlight)?;
            }
            glyph::blank_cells(out, horizontal.trailing)?;
        }

        if index + 1 < lines.len() {
            blank_rows(out, LINE_SPACING, cols)?;
        }
    }

    blank_rows(out, vertical.trailing, cols)?;
    out.flush()
}

/// Fills the whole screen with one kind of cell, used while blinking.
///
/// A painted fill is reverse video, bold and red; an unpainted fill is plain
/// blanks.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render_fill<W: Write>(out: &mut W, geometry: Geometry, painted: bool) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;
    if painted {
        queue!(
            out,
            SetAttribute(Attribute::Reverse),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::DarkRed)
        )?;
    }
    blank_rows(out, usize::from(geometry.rows), usize::from(geometry.cols))?;
    queue!(out, SetAttribute(Attribute::Reset))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_splits_remainder_to_trailing_side() {
        assert_eq!(
            Padding::center(80, 40),
            Padding {
                leading: 20,
                trailing: 20
            }
        );
        assert_eq!(
            Padding::center(24, 7),
            Padding {
                leading: 8,
                trailing: 9
            }
        );
    }

    #[test]
    fn test_center_clamps_overflow_to_zero() {
        assert_eq!(
            Padding::center(10, 40),
            Padding {
                leading: 0,
                trailing: 0
            }
        );
    }

    #[test]
    fn test_content_height_counts_spacers_between_lines() {
        assert_eq!(content_height(0), 0);
        assert_eq!(content_height(1), 7);
        assert_eq!(content_height(2), 16);
    }

    #[test]
    fn test_frame_starts_at_home() {
        let mut out = Vec::new();
        render_frame(&mut out, &["1"], false, Geometry::new(10, 8)).unwrap();
        assert!(out.starts_with(b"\x1b[1;1H"));
    }

    #[test]
    fn test_frame_writes_every_cell() {
        let geometry = Geometry::new(30, 12);
        let mut out = Vec::new();
        render_frame(&mut out, &[" "], false, geometry).unwrap();
        // A blank glyph emits no escapes, so the body is just spaces.
        let body = &out[b"\x1b[1;1H".len()..];
        assert_eq!(body.len(), 30 * 12);
        assert!(body.iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_same_input_renders_identically() {
        let geometry = Geometry::new(80, 24);
        let mut first = Vec::new();
        let mut second = Vec::new();
        render_frame(&mut first, &["1d", "01:00:00"], true, geometry).unwrap();
        render_frame(&mut second, &["1d", "01:00:00"], true, geometry).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fill_resets_attributes() {
        let mut out = Vec::new();
        render_fill(&mut out, Geometry::new(4, 2), true).unwrap();
        assert!(out.ends_with(b"\x1b[0m"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[7m"));
        assert_eq!(text.matches(' ').count(), 8);
    }
}
