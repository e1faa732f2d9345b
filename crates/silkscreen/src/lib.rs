#![no_std]

//! `pixel-text-silkscreen` is a glyph table for the `pixel-text` crate
//! containing the Silkscreen pixel font.
//!
//! Silkscreen was drawn by Jason Kottke: <http://kottke.org/plus/type/silkscreen/>.
//! This table covers lowercase letters, digits, common punctuation and a few
//! currency and decorative symbols. Uppercase letters are drawn with their
//! lowercase glyph and most accented Latin letters fall back to their base
//! letter.

use pixel_text_core::{Glyph, GlyphSource};

include!(concat!(env!("OUT_DIR"), "/silkscreen_font.rs"));

/// Width of the space glyph unless configured otherwise.
pub const DEFAULT_SPACE_WIDTH: usize = 2;

/// The Silkscreen glyph table.
///
/// The authored glyphs are static. Only the space glyph is generated, from
/// the configured space width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    space: Glyph,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphTable {
    pub fn new() -> Self {
        Self {
            space: Glyph::blank(DEFAULT_SPACE_WIDTH),
        }
    }

    pub fn space_width(&self) -> usize {
        self.space.width
    }

    /// Regenerate the space glyph as 7 blank rows of `width` columns.
    pub fn set_space_width(&mut self, width: usize) {
        self.space = Glyph::blank(width);
    }

    /// Find the glyph for a character.
    ///
    /// Lookup is case-insensitive and accented letters are folded to their
    /// base letter first (see [`fold`]). Returns `None` for anything else
    /// the font does not draw, including ligatures such as `æ` and `ß`.
    pub fn lookup(&self, character: char) -> Option<Glyph> {
        let character = fold(character)?;

        if character == ' ' {
            return Some(self.space);
        }

        SILKSCREEN_FONT
            .binary_search_by_key(&character, |(c, _)| *c)
            .ok()
            .map(|i| SILKSCREEN_FONT[i].1)
    }

    /// Every character with a glyph of its own, space first.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        core::iter::once(' ').chain(SILKSCREEN_FONT.iter().map(|(c, _)| *c))
    }
}

impl GlyphSource for GlyphTable {
    fn glyph(&self, character: char) -> Option<Glyph> {
        self.lookup(character)
    }
}

/// Normalize a character before glyph lookup.
///
/// Lowercases the character, then maps accented Latin letters onto the base
/// letter Silkscreen draws for them. Returns `None` when lowercasing yields
/// more than one character.
pub fn fold(character: char) -> Option<char> {
    let mut lower = character.to_lowercase();
    let c = lower.next()?;
    if lower.next().is_some() {
        return None;
    }

    Some(match c {
        'â' | 'á' | 'à' | 'ä' | 'å' | 'ă' => 'a',
        'ê' | 'é' | 'è' | 'ë' => 'e',
        'î' | 'í' | 'ì' | 'ï' => 'i',
        'ô' | 'ó' | 'ò' | 'ö' | 'ø' => 'o',
        'û' | 'ú' | 'ù' | 'ü' | 'ů' => 'u',
        'ÿ' | 'ý' => 'y',
        'č' | 'ć' => 'c',
        'đ' => 'd',
        'ñ' => 'n',
        'ț' => 't',
        'š' | 'ș' => 's',
        'ž' => 'z',
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_text_core::{GLYPH_HEIGHT, PixelGrid};

    extern crate alloc;
    use alloc::vec::Vec;

    fn rows(c: char) -> Vec<alloc::string::String> {
        PixelGrid::from(GlyphTable::new().lookup(c).unwrap()).to_strings()
    }

    #[test]
    fn authored_a() {
        assert_eq!(
            rows('a'),
            ["0000", "0110", "1001", "1111", "1001", "1001", "0000"]
        );
    }

    #[test]
    fn widths_vary_between_glyphs() {
        let table = GlyphTable::new();
        assert_eq!(table.lookup('i').unwrap().width, 1);
        assert_eq!(table.lookup('m').unwrap().width, 5);
        assert_eq!(table.lookup('—').unwrap().width, 7);
    }

    #[test]
    fn every_glyph_has_seven_even_rows() {
        let table = GlyphTable::new();
        for c in table.chars() {
            let grid = PixelGrid::from(table.lookup(c).unwrap());
            assert_eq!(grid.height(), GLYPH_HEIGHT, "{c:?}");
            assert!(grid.rows().all(|row| row.len() == grid.width()), "{c:?}");
        }
    }

    #[test]
    fn case_insensitive() {
        let table = GlyphTable::new();
        assert_eq!(table.lookup('Q'), table.lookup('q'));
        assert_eq!(table.lookup('Ä'), table.lookup('a'));
        assert_eq!(table.lookup('Ç'), table.lookup('ç'));
    }

    #[test]
    fn folds_diacritics() {
        let table = GlyphTable::new();
        for (accented, base) in [('å', 'a'), ('ë', 'e'), ('ø', 'o'), ('ț', 't'), ('ž', 'z'), ('Š', 's')] {
            assert_eq!(fold(accented), Some(base));
            assert_eq!(table.lookup(accented), table.lookup(base));
        }
        // Folding is idempotent
        assert_eq!(fold('a'), Some('a'));
        assert_ne!(table.lookup('ç'), table.lookup('c'));
    }

    #[test]
    fn ligatures_and_unknowns_are_missing() {
        let table = GlyphTable::new();
        for c in ['æ', 'œ', 'ß', 'Æ', '\n', '語'] {
            assert_eq!(table.lookup(c), None, "{c:?}");
        }
        // 'İ' lowercases to two characters
        assert_eq!(fold('İ'), None);
    }

    #[test]
    fn space_width_is_configurable() {
        let mut table = GlyphTable::new();
        assert_eq!(table.lookup(' '), Some(Glyph::blank(DEFAULT_SPACE_WIDTH)));

        table.set_space_width(5);
        assert_eq!(table.space_width(), 5);
        assert_eq!(table.lookup(' '), Some(Glyph::blank(5)));
        // Other glyphs are untouched
        assert_eq!(table.lookup('a'), GlyphTable::new().lookup('a'));

        table.set_space_width(0);
        assert_eq!(table.lookup(' ').unwrap().width, 0);
    }

    #[test]
    fn table_is_sorted_and_complete() {
        assert_eq!(SILKSCREEN_FONT.len(), 83);
        assert!(SILKSCREEN_FONT.windows(2).all(|w| w[0].0 < w[1].0));
        let table = GlyphTable::new();
        for c in "abcdefghijklmnopqrstuvwxyz0123456789.,:;!?@#$%&'\"`^~_+*=/\\()[]{}<>|-".chars() {
            assert!(table.lookup(c).is_some(), "{c:?}");
        }
        for c in ['–', '—', '¡', '¿', '£', '€', '¥', 'ç', '¬', '†', 'π', '¶', '☺', '☹', '☻'] {
            assert!(table.lookup(c).is_some(), "{c:?}");
        }
    }
}
