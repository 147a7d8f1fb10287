//! Bitmap font for the big clock digits.
//!
//! Every glyph is 7 rows of 8 pixels. Each row is a bitmask whose most
//! significant bit is the leftmost pixel: `0x3D = 0b0011_1101 = "  xxxx x"`.

/// Number of pixel rows in every glyph.
pub const GLYPH_HEIGHT: usize = 7;

/// Number of pixel columns (terminal cells) in every glyph.
pub const GLYPH_WIDTH: usize = 8;

/// A single character's bitmap, top row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// Fully painted cell, used for characters the font does not know.
    pub const BLOCK: Glyph = Glyph::new([0xFF; GLYPH_HEIGHT]);

    pub const fn new(rows: [u8; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Returns the bitmask of one pixel row.
    ///
    /// # Panics
    /// Panics if `row >= GLYPH_HEIGHT`.
    pub fn row(&self, row: usize) -> u8 {
        self.rows[row]
    }

    /// Returns whether the pixel at `(row, column)` is painted.
    ///
    /// Column 0 is the leftmost pixel.
    pub fn is_set(&self, row: usize, column: usize) -> bool {
        debug_assert!(column < GLYPH_WIDTH);
        self.row(row) & (0x80 >> column) != 0
    }
}

const FONT: [(char, Glyph); 14] = [
    ('0', Glyph::new([0x3C, 0x42, 0x42, 0x00, 0x42, 0x42, 0x3C])),
    ('1', Glyph::new([0x00, 0x02, 0x02, 0x00, 0x02, 0x02, 0x00])),
    ('2', Glyph::new([0x3C, 0x02, 0x02, 0x3C, 0x40, 0x40, 0x3C])),
    ('3', Glyph::new([0x3C, 0x02, 0x02, 0x3C, 0x02, 0x02, 0x3C])),
    ('4', Glyph::new([0x00, 0x42, 0x42, 0x3C, 0x02, 0x02, 0x00])),
    ('5', Glyph::new([0x3C, 0x40, 0x40, 0x3C, 0x02, 0x02, 0x3C])),
    ('6', Glyph::new([0x3C, 0x40, 0x40, 0x3C, 0x42, 0x42, 0x3C])),
    ('7', Glyph::new([0x3C, 0x02, 0x02, 0x00, 0x02, 0x02, 0x00])),
    ('8', Glyph::new([0x3C, 0x42, 0x42, 0x3C, 0x42, 0x42, 0x3C])),
    ('9', Glyph::new([0x3C, 0x42, 0x42, 0x3C, 0x02, 0x02, 0x3C])),
    ('d', Glyph::new([0x00, 0x02, 0x02, 0x3C, 0x42, 0x42, 0x3C])),
    ('y', Glyph::new([0x00, 0x00, 0x42, 0x3C, 0x02, 0x02, 0x0C])),
    (':', Glyph::new([0x00, 0x00, 0x18, 0x00, 0x18, 0x00, 0x00])),
    (' ', Glyph::new([0x00; GLYPH_HEIGHT])),
];

/// Looks up the glyph for `ch`.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    FONT.iter()
        .find(|(known, _)| *known == ch)
        .map(|(_, glyph)| glyph)
}

/// Looks up the glyph for `ch`, falling back to [`Glyph::BLOCK`].
pub fn glyph_or_block(ch: char) -> &'static Glyph {
    glyph(ch).unwrap_or(&Glyph::BLOCK)
}

/// Returns whether every character of `text` has a glyph.
pub fn supports(text: &str) -> bool {
    text.chars().all(|ch| glyph(ch).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_has_unique_entries() {
        for (i, (a, _)) in FONT.iter().enumerate() {
            for (b, _) in &FONT[i + 1..] {
                assert_ne!(a, b, "duplicate glyph for {a:?}");
            }
        }
    }

    #[test]
    fn test_font_covers_clock_alphabet() {
        assert!(supports("0123456789:dy "));
    }

    #[test]
    fn test_space_is_blank() {
        let space = glyph(' ').unwrap();
        for row in 0..GLYPH_HEIGHT {
            assert_eq!(space.row(row), 0);
        }
    }

    #[test]
    fn test_unknown_char_falls_back_to_block() {
        assert!(glyph('x').is_none());
        assert_eq!(glyph_or_block('x'), &Glyph::BLOCK);
        assert!(!supports("12x"));
    }

    #[test]
    fn test_is_set_reads_msb_first() {
        // 0x18 = 0b0001_1000 -> columns 3 and 4 in the colon's middle rows
        let colon = glyph(':').unwrap();
        let painted: Vec<usize> = (0..GLYPH_WIDTH).filter(|&c| colon.is_set(2, c)).collect();
        assert_eq!(painted, vec![3, 4]);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let _ = Glyph::BLOCK.row(GLYPH_HEIGHT);
    }
}
