//! Rectangular binary pixel grids.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::{Error, Glyph, Result};

/// A rectangular grid of on/off pixels, stored row-major, top to bottom.
///
/// Every row has exactly [`PixelGrid::width`] cells. A grid with no rows is
/// empty and has width 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl PixelGrid {
    /// Create a blank grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![false; width]; height],
        }
    }

    /// Parse a grid from its wire format: one string of `0`/`1` per row.
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grid = Self::default();

        for (i, row) in rows.into_iter().enumerate() {
            let cells = row
                .as_ref()
                .chars()
                .map(|c| match c {
                    '0' => Ok(false),
                    '1' => Ok(true),
                    _ => Err(Error::MalformedGrid("cells must be '0' or '1'")),
                })
                .collect::<Result<Vec<_>>>()?;

            if i == 0 {
                grid.width = cells.len();
            } else if cells.len() != grid.width {
                return Err(Error::MalformedGrid("rows differ in length"));
            }

            grid.rows.push(cells);
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True when the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The pixel at column `x`, row `y`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Set the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.rows[y][x] = value;
    }

    /// A single row of the grid.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not below [`PixelGrid::height`].
    pub fn row(&self, y: usize) -> &[bool] {
        &self.rows[y]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Render the grid to its wire format: one string of `0`/`1` per row.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&on| if on { '1' } else { '0' }).collect())
            .collect()
    }

    /// Surround the grid with blank cells on each side.
    pub fn pad(&mut self, north: usize, east: usize, south: usize, west: usize) {
        let width = self.width + west + east;

        let mut rows = vec![vec![false; width]; north];

        for old in self.rows.drain(..) {
            let mut row = vec![false; west];
            row.extend(old);
            row.resize(width, false);
            rows.push(row);
        }

        rows.resize(rows.len() + south, vec![false; width]);
        self.rows = rows;
        self.width = width;
    }

    /// Append `other` to the right of this grid.
    ///
    /// An empty grid takes on the height of `other`.
    ///
    /// # Panics
    ///
    /// Panics if both grids have rows and their heights differ.
    pub fn append_columns(&mut self, other: &PixelGrid) {
        if self.rows.is_empty() {
            self.rows = vec![Vec::new(); other.height()];
        }
        assert_eq!(self.height(), other.height(), "grid heights differ");

        for (row, extra) in self.rows.iter_mut().zip(&other.rows) {
            row.extend_from_slice(extra);
        }
        self.width += other.width;
    }

    /// Prepend `other` to the left of this grid.
    ///
    /// # Panics
    ///
    /// Panics if both grids have rows and their heights differ.
    pub fn prepend_columns(&mut self, other: &PixelGrid) {
        let mut joined = other.clone();
        joined.append_columns(self);
        *self = joined;
    }

    /// Append the rows of `other` below this grid.
    ///
    /// An empty grid takes on the width of `other`.
    ///
    /// # Panics
    ///
    /// Panics if both grids have rows and their widths differ.
    pub fn append_rows(&mut self, other: &PixelGrid) {
        if self.rows.is_empty() {
            self.width = other.width;
        }
        assert_eq!(self.width, other.width, "grid widths differ");

        self.rows.extend(other.rows.iter().cloned());
    }

    /// Prepend the rows of `other` above this grid.
    ///
    /// # Panics
    ///
    /// Panics if both grids have rows and their widths differ.
    pub fn prepend_rows(&mut self, other: &PixelGrid) {
        let mut joined = other.clone();
        joined.append_rows(self);
        *self = joined;
    }

    /// Copy `other` into this grid with its top-left corner at (`x`, `y`).
    ///
    /// # Panics
    ///
    /// Panics if `other` does not fit inside this grid at that position.
    pub fn blit(&mut self, other: &PixelGrid, x: usize, y: usize) {
        for (dy, src) in other.rows.iter().enumerate() {
            self.rows[y + dy][x..x + other.width].copy_from_slice(src);
        }
    }

    /// Mirror the grid left to right.
    pub fn reflect_horizontal(&self) -> Self {
        Self {
            width: self.width,
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().rev().copied().collect())
                .collect(),
        }
    }

    /// Mirror the grid top to bottom.
    pub fn reflect_vertical(&self) -> Self {
        Self {
            width: self.width,
            rows: self.rows.iter().rev().cloned().collect(),
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        Self {
            width: self.height(),
            rows: (0..self.width)
                .map(|x| self.rows.iter().map(|row| row[x]).collect())
                .collect(),
        }
    }
}

impl From<Glyph> for PixelGrid {
    fn from(glyph: Glyph) -> Self {
        Self {
            width: glyph.width,
            rows: (0..glyph.rows.len())
                .map(|y| (0..glyph.width).map(|x| glyph.pixel(x, y)).collect())
                .collect(),
        }
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &on in row {
                f.write_str(if on { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn grid(rows: &[&str]) -> PixelGrid {
        PixelGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn parses_wire_format() {
        let g = grid(&["010", "111"]);
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.get(1, 0), Some(true));
        assert_eq!(g.get(0, 0), Some(false));
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.to_strings(), ["010", "111"]);
        assert_eq!(g.to_string(), "010\n111");
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            PixelGrid::from_rows(["01", "1"]),
            Err(Error::MalformedGrid("rows differ in length"))
        );
        assert!(PixelGrid::from_rows(["0 1"]).is_err());
    }

    #[test]
    fn empty_grid() {
        let g = PixelGrid::from_rows(Vec::<&str>::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.width(), 0);
        assert_eq!(g, PixelGrid::default());
    }

    #[test]
    fn pads_each_side() {
        let mut g = grid(&["1"]);
        g.pad(1, 2, 0, 1);
        assert_eq!(g.to_strings(), ["0000", "0100"]);
    }

    #[test]
    fn joins_columns_and_rows() {
        let mut g = PixelGrid::default();
        g.append_columns(&grid(&["1", "0"]));
        g.append_columns(&grid(&["01", "10"]));
        assert_eq!(g.to_strings(), ["101", "010"]);

        g.prepend_columns(&grid(&["1", "1"]));
        assert_eq!(g.to_strings(), ["1101", "1010"]);

        g.append_rows(&grid(&["0000"]));
        g.prepend_rows(&grid(&["1111"]));
        assert_eq!(g.to_strings(), ["1111", "1101", "1010", "0000"]);
    }

    #[test]
    #[should_panic]
    fn mismatched_heights_panic() {
        let mut g = grid(&["1", "1"]);
        g.append_columns(&grid(&["1"]));
    }

    #[test]
    fn blits_inside() {
        let mut g = PixelGrid::new(4, 3);
        g.blit(&grid(&["11", "01"]), 1, 1);
        assert_eq!(g.to_strings(), ["0000", "0110", "0010"]);
    }

    #[test]
    fn reflects_and_transposes() {
        let g = grid(&["110", "001"]);
        assert_eq!(g.reflect_horizontal().to_strings(), ["011", "100"]);
        assert_eq!(g.reflect_vertical().to_strings(), ["001", "110"]);

        let t = g.transpose();
        assert_eq!(t.width(), 2);
        assert_eq!(t.height(), 3);
        assert_eq!(t.to_strings(), ["10", "10", "01"]);
        assert_eq!(t.transpose(), g);
    }
}
