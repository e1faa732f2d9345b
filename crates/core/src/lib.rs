#![no_std]

//! `pixel-text-core` provides core primitives for the `pixel-text` crate.

extern crate alloc;

mod error;
mod grid;

pub use error::{Error, Result, non_negative};
pub use grid::PixelGrid;

/// Number of pixel rows in every glyph.
pub const GLYPH_HEIGHT: usize = 7;

/// A single glyph (character) contained within a bitmap font.
///
/// Each row is packed into a byte, leftmost pixel in the most significant
/// bit. Pixels past the eighth column are always off, which lets wide blank
/// glyphs such as the space share the representation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
    /// Width of this glyph in pixels
    pub width: usize,
    /// Packed pixel rows, top to bottom
    pub rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// A glyph with no pixels set.
    pub const fn blank(width: usize) -> Self {
        Self {
            width,
            rows: [0; GLYPH_HEIGHT],
        }
    }

    /// Is the pixel at column `x`, row `y` on?
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < self.width && x < 8 && self.rows[y] & (0x80 >> x) != 0
    }
}

/// Looks up the glyph used to draw a character.
///
/// Implementors decide how characters are normalized before lookup.
/// Characters with no glyph return `None` and are skipped by layout.
pub trait GlyphSource {
    fn glyph(&self, character: char) -> Option<Glyph>;
}
