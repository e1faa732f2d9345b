//! Laying out text into pixel grids.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Display;
use core::mem;

use pixel_text_core::{
    Error, GLYPH_HEIGHT, GlyphSource, PixelGrid, Result, non_negative,
};
use pixel_text_silkscreen::GlyphTable;
use tracing::{debug, trace};

use crate::border::{Padding, draw_border};
use crate::config::LayoutConfig;
use crate::speech::{TailDirection, TailSet};

/// Render one line of text, separating glyphs by `tracking` blank columns.
///
/// Characters with no glyph are skipped. Text with nothing to draw gives an
/// empty grid.
pub fn compose_line<S: GlyphSource>(source: &S, text: &str, tracking: usize) -> PixelGrid {
    let mut line = PixelGrid::default();
    let mut started = false;

    for character in text.chars() {
        let Some(glyph) = source.glyph(character) else {
            trace!(?character, "no glyph, skipping");
            continue;
        };

        if started {
            line.append_columns(&PixelGrid::new(tracking, GLYPH_HEIGHT));
        }
        line.append_columns(&PixelGrid::from(glyph));
        started = true;
    }

    line
}

/// Pad `line` with blank columns on both sides up to `width`.
///
/// When the padding is odd the extra column goes on the right.
fn center(line: &mut PixelGrid, width: usize) {
    let extra = width - line.width();
    let left = extra / 2;
    line.pad(0, extra - left, 0, left);
}

/// Split text into lines on `\n`, ignoring trailing line breaks.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.trim_end_matches(['\n', '\r'])
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// A text layout session using the Silkscreen font.
///
/// The session keeps the most recent text and pixel map. Rendering replaces
/// the pixel map; borders and tails transform it in place:
///
/// ```
/// use pixel_text::{Padding, PixelFont};
///
/// let mut font = PixelFont::new();
/// font.set_text("Lorem ipsum dolor sit amet.");
/// font.to_paragraph(70);
/// font.to_pixels();
/// font.border(Padding::default())?;
/// font.speech("SE".parse()?, 4)?;
///
/// for row in font.pixel_map().unwrap().to_strings() {
///     println!("{row}");
/// }
/// # Ok::<(), pixel_text::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PixelFont {
    glyphs: GlyphTable,
    tails: TailSet,
    tracking: usize,
    leading: usize,
    text: String,
    pixel_map: Option<PixelGrid>,
}

impl Default for PixelFont {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelFont {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        let mut glyphs = GlyphTable::new();
        glyphs.set_space_width(config.space_width);

        Self {
            glyphs,
            tails: TailSet::new(),
            tracking: config.tracking,
            leading: config.leading,
            text: String::new(),
            pixel_map: None,
        }
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    pub fn tracking(&self) -> usize {
        self.tracking
    }

    pub fn leading(&self) -> usize {
        self.leading
    }

    pub fn space_width(&self) -> usize {
        self.glyphs.space_width()
    }

    /// Set the blank columns between glyphs. Negative values are rejected.
    pub fn set_tracking<T>(&mut self, tracking: T) -> Result<()>
    where
        T: TryInto<usize> + PartialOrd + Default + Display + Copy,
    {
        self.tracking = non_negative("tracking", tracking)?;
        Ok(())
    }

    /// Set the blank rows between lines. Negative values are rejected.
    pub fn set_leading<T>(&mut self, leading: T) -> Result<()>
    where
        T: TryInto<usize> + PartialOrd + Default + Display + Copy,
    {
        self.leading = non_negative("leading", leading)?;
        Ok(())
    }

    /// Set the width of the space glyph. Negative values are rejected.
    pub fn set_space_width<T>(&mut self, space_width: T) -> Result<()>
    where
        T: TryInto<usize> + PartialOrd + Default + Display + Copy,
    {
        let space_width = non_negative("space width", space_width)?;
        self.glyphs.set_space_width(space_width);
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The grid produced by the last render, border or tail.
    pub fn pixel_map(&self) -> Option<&PixelGrid> {
        self.pixel_map.as_ref()
    }

    pub fn take_pixel_map(&mut self) -> Option<PixelGrid> {
        self.pixel_map.take()
    }

    /// Render a single line of text.
    pub fn render_line(&self, text: &str) -> PixelGrid {
        compose_line(&self.glyphs, text, self.tracking)
    }

    /// Width in pixels of a single rendered line, including tracking.
    pub fn line_width(&self, text: &str) -> usize {
        self.render_line(text).width()
    }

    /// Render multi-line text without touching the session.
    ///
    /// Each line is rendered on its own and the lines are stacked with
    /// `leading` blank rows between them, each centered on the widest.
    /// Lines with nothing to draw add no rows of their own. If no line has
    /// anything to draw the result is empty.
    pub fn render_text(&self, text: &str, leading: usize) -> PixelGrid {
        let lines: Vec<PixelGrid> = split_lines(text)
            .map(|line| self.render_line(line))
            .collect();

        let width = lines.iter().map(PixelGrid::width).max().unwrap_or(0);
        if width == 0 {
            return PixelGrid::default();
        }

        let mut grid = PixelGrid::default();
        for (i, mut line) in lines.into_iter().enumerate() {
            if i > 0 {
                grid.append_rows(&PixelGrid::new(width, leading));
            }
            center(&mut line, width);
            grid.append_rows(&line);
        }

        grid
    }

    /// Render the current text with the current leading and store it as the
    /// pixel map.
    pub fn to_pixels(&mut self) -> &PixelGrid {
        let grid = self.render_text(&self.text, self.leading);
        self.store_render(grid)
    }

    /// Render `text` with the given leading and store it as the pixel map.
    ///
    /// The session text is left alone.
    pub fn to_pixels_with(&mut self, text: &str, leading: usize) -> &PixelGrid {
        let grid = self.render_text(text, leading);
        self.store_render(grid)
    }

    fn store_render(&mut self, grid: PixelGrid) -> &PixelGrid {
        debug!(
            width = grid.width(),
            height = grid.height(),
            "rendered text"
        );
        self.pixel_map.insert(grid)
    }

    /// Word-wrap `text` so no line is wider than `max_width` pixels.
    ///
    /// Words are separated by any whitespace, so existing line breaks are
    /// ignored. Words are never split: a word wider than `max_width` gets a
    /// line to itself.
    pub fn wrap(&self, text: &str, max_width: usize) -> String {
        let mut lines = Vec::new();
        let mut buffer = String::new();

        for word in text.split_whitespace() {
            let candidate = if buffer.is_empty() {
                word.to_owned()
            } else {
                format!("{buffer} {word}")
            };

            if self.line_width(&candidate) > max_width {
                if !buffer.is_empty() {
                    lines.push(mem::take(&mut buffer));
                }
                buffer = word.to_owned();
            } else {
                buffer = candidate;
            }
        }

        if !buffer.is_empty() {
            lines.push(buffer);
        }

        lines.join("\n")
    }

    /// Word-wrap the current text in place. See [`PixelFont::wrap`].
    ///
    /// This only changes the text; call [`PixelFont::to_pixels`] to render it.
    pub fn to_paragraph(&mut self, max_width: usize) -> &str {
        self.text = self.wrap(&self.text, max_width);
        debug!(
            max_width,
            lines = self.text.lines().count(),
            "wrapped paragraph"
        );

        &self.text
    }

    /// Draw a border around the current pixel map.
    ///
    /// Repeated calls nest frames, each around the previous result.
    pub fn border(&mut self, padding: Padding) -> Result<&PixelGrid> {
        let framed = draw_border(self.pixel_map.as_ref().ok_or(Error::NoPixelMap)?, padding)?;
        Ok(&*self.pixel_map.insert(framed))
    }

    /// Draw a border around `grid` and make the result the pixel map.
    pub fn border_grid(&mut self, grid: &PixelGrid, padding: Padding) -> Result<&PixelGrid> {
        let framed = draw_border(grid, padding)?;
        Ok(&*self.pixel_map.insert(framed))
    }

    /// Attach a speech balloon tail to the current pixel map.
    ///
    /// The pixel map is expected to have a border; see
    /// [`TailSet::attach`]. On error the pixel map
    /// is left unchanged.
    pub fn speech(&mut self, direction: TailDirection, offset: usize) -> Result<&PixelGrid> {
        let with_tail = self.tails.attach(
            self.pixel_map.as_ref().ok_or(Error::NoPixelMap)?,
            direction,
            offset,
        )?;
        Ok(&*self.pixel_map.insert(with_tail))
    }

    /// Render every supported character, wrapped to `max_width` and framed.
    ///
    /// Replaces the current text with the list of characters.
    pub fn glyph_sheet(&mut self, max_width: usize) -> Result<&PixelGrid> {
        let mut text = String::new();
        for c in self.glyphs.chars() {
            text.push(c);
            text.push(' ');
        }

        self.text = text;
        self.to_paragraph(max_width);
        self.to_pixels();
        self.border(Padding::default())
    }
}
