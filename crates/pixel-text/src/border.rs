//! Rounded single-pixel frames around pixel grids.

use alloc::vec::Vec;
use core::fmt::Display;

use pixel_text_core::{Error, PixelGrid, Result, non_negative};
use tracing::debug;

/// Padding used when none is given.
pub const DEFAULT_PADDING: usize = 3;

/// Blank space between a grid and the border drawn around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    /// The same padding on all four sides.
    Uniform(usize),
    /// One value for north and south, another for east and west.
    Symmetric { vertical: usize, horizontal: usize },
    /// Each side given separately.
    Explicit {
        north: usize,
        east: usize,
        south: usize,
        west: usize,
    },
}

impl Default for Padding {
    fn default() -> Self {
        Self::Uniform(DEFAULT_PADDING)
    }
}

impl Padding {
    /// Build padding from a list of values, CSS shorthand style.
    ///
    /// | values | meaning |
    /// |--------|---------|
    /// | none | [`DEFAULT_PADDING`] on every side |
    /// | `[p]` | `p` on every side |
    /// | `[v, h]` | `v` north and south, `h` east and west |
    /// | `[n, e, s, w]` | each side separately |
    ///
    /// Three values (or more than four) are ambiguous and rejected, as are
    /// negative values.
    pub fn from_values<T>(values: &[T]) -> Result<Self>
    where
        T: TryInto<usize> + PartialOrd + Default + Display + Copy,
    {
        let values = values
            .iter()
            .map(|&v| non_negative("padding", v))
            .collect::<Result<Vec<_>>>()?;

        match values[..] {
            [] => Ok(Self::default()),
            [p] => Ok(Self::Uniform(p)),
            [vertical, horizontal] => Ok(Self::Symmetric {
                vertical,
                horizontal,
            }),
            [north, east, south, west] => Ok(Self::Explicit {
                north,
                east,
                south,
                west,
            }),
            _ => Err(Error::AmbiguousPadding {
                count: values.len(),
            }),
        }
    }

    /// Padding for each side, in north, east, south, west order.
    pub fn sides(self) -> [usize; 4] {
        match self {
            Self::Uniform(p) => [p; 4],
            Self::Symmetric {
                vertical,
                horizontal,
            } => [vertical, horizontal, vertical, horizontal],
            Self::Explicit {
                north,
                east,
                south,
                west,
            } => [north, east, south, west],
        }
    }
}

/// Draw a rounded one-pixel border around `grid`, after padding it.
///
/// The result is `2 + west + east` columns wider and `2 + north + south`
/// rows taller. Its four corner pixels are off and the pixel diagonally
/// inside each corner is on, which reads as a rounded corner.
pub fn draw_border(grid: &PixelGrid, padding: Padding) -> Result<PixelGrid> {
    if grid.is_empty() {
        return Err(Error::EmptyGrid);
    }

    let [north, east, south, west] = padding.sides();
    let mut framed = grid.clone();
    framed.pad(north, east, south, west);

    let mut side = PixelGrid::new(1, framed.height());
    for y in 0..side.height() {
        side.set(0, y, true);
    }
    framed.prepend_columns(&side);
    framed.append_columns(&side);

    // Round off the inner corners
    let width = framed.width();
    for y in [0, framed.height() - 1] {
        framed.set(0, y, false);
        framed.set(1, y, true);
        framed.set(width - 2, y, true);
        framed.set(width - 1, y, false);
    }

    let mut line = PixelGrid::new(width, 1);
    for x in 2..width.saturating_sub(2) {
        line.set(x, 0, true);
    }
    framed.prepend_rows(&line);
    framed.append_rows(&line);

    debug!(
        north,
        east,
        south,
        west,
        width = framed.width(),
        height = framed.height(),
        "drew border"
    );

    Ok(framed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> PixelGrid {
        PixelGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn padding_dispatch() {
        assert_eq!(Padding::from_values::<i32>(&[]), Ok(Padding::Uniform(3)));
        assert_eq!(Padding::from_values(&[5]).unwrap().sides(), [5, 5, 5, 5]);
        assert_eq!(Padding::from_values(&[4, 8]).unwrap().sides(), [4, 8, 4, 8]);
        assert_eq!(
            Padding::from_values(&[1, 2, 3, 4]).unwrap().sides(),
            [1, 2, 3, 4]
        );
        assert_eq!(
            Padding::from_values(&[1, 2, 3]),
            Err(Error::AmbiguousPadding { count: 3 })
        );
        assert_eq!(
            Padding::from_values(&[1, 2, 3, 4, 5]),
            Err(Error::AmbiguousPadding { count: 5 })
        );
        assert!(matches!(
            Padding::from_values(&[2, -1]),
            Err(Error::NegativeValue { name: "padding", .. })
        ));
    }

    #[test]
    fn zero_padding_frame() {
        let framed = draw_border(&grid(&["111", "101", "111"]), Padding::Uniform(0)).unwrap();
        assert_eq!(
            framed.to_strings(),
            ["00100", "01110", "11011", "01110", "00100"]
        );
    }

    #[test]
    fn uniform_padding_frame() {
        let framed = draw_border(&grid(&["1"]), Padding::Uniform(1)).unwrap();
        assert_eq!(
            framed.to_strings(),
            ["00100", "01010", "10101", "01010", "00100"]
        );
    }

    #[test]
    fn frame_dimensions_and_corners() {
        let inner = PixelGrid::new(6, 4);
        for p in 0..4 {
            let framed = draw_border(&inner, Padding::Uniform(p)).unwrap();
            let (w, h) = (framed.width(), framed.height());
            assert_eq!(w, 6 + 2 * p + 2);
            assert_eq!(h, 4 + 2 * p + 2);

            for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
                assert_eq!(framed.get(x, y), Some(false));
            }
            for (x, y) in [(1, 1), (w - 2, 1), (1, h - 2), (w - 2, h - 2)] {
                assert_eq!(framed.get(x, y), Some(true));
            }
        }
    }

    #[test]
    fn asymmetric_padding() {
        let inner = grid(&["1"]);
        let framed = draw_border(&inner, Padding::from_values(&[1, 2, 3, 4]).unwrap()).unwrap();
        assert_eq!(framed.width(), 1 + 2 + 4 + 2);
        assert_eq!(framed.height(), 1 + 1 + 3 + 2);
        // Inner pixel sits after the west padding and north padding
        assert_eq!(framed.get(1 + 4, 1 + 1), Some(true));
    }

    #[test]
    fn borders_nest() {
        let once = draw_border(&grid(&["1"]), Padding::Uniform(0)).unwrap();
        let twice = draw_border(&once, Padding::Uniform(0)).unwrap();
        assert_eq!(twice.width(), once.width() + 2);
        assert_eq!(twice.height(), once.height() + 2);
    }

    #[test]
    fn empty_grid_has_no_border() {
        assert_eq!(
            draw_border(&PixelGrid::default(), Padding::default()),
            Err(Error::EmptyGrid)
        );
    }
}
