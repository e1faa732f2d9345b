//! Layout settings for [`PixelFont`](crate::PixelFont).

use pixel_text_silkscreen::DEFAULT_SPACE_WIDTH;

/// Spacing used when laying out text.
///
/// ```
/// use pixel_text::{LayoutConfig, PixelFont};
///
/// let config = LayoutConfig::default().tracking(1).leading(3);
/// let font = PixelFont::with_config(config);
/// assert_eq!(font.tracking(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutConfig {
    /// Blank columns between adjacent glyphs on a line.
    pub tracking: usize,
    /// Blank rows between stacked lines.
    pub leading: usize,
    /// Width of the space glyph.
    pub space_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tracking: 2,
            leading: 1,
            space_width: DEFAULT_SPACE_WIDTH,
        }
    }
}

impl LayoutConfig {
    pub fn tracking(mut self, tracking: usize) -> Self {
        self.tracking = tracking;
        self
    }

    pub fn leading(mut self, leading: usize) -> Self {
        self.leading = leading;
        self
    }

    pub fn space_width(mut self, space_width: usize) -> Self {
        self.space_width = space_width;
        self
    }
}
