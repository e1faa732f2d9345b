//! Speech balloon tails attached to bordered grids.
//!
//! A tail is named by two compass letters. The first is the edge of the
//! grid it hangs from, the second the way its point leans, which must be
//! across that edge: `SE` hangs below the grid and leans right, `WN` sticks
//! out of the left side and leans up.
//!
//! All eight tails are mirror images or transpositions of one drawn shape,
//! so they always match each other.

use alloc::borrow::ToOwned;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use pixel_text_core::{Error, PixelGrid, Result};
use tracing::debug;

/// The `SE` tail, hanging below the grid with its point leaning east.
///
/// The top row continues the border through the gap cut for it.
const SOUTH_EAST: [&[u8; 7]; 4] = [b"1000100", b"0100010", b"0011001", b"0000111"];

/// Pixels written into the border line where a tail joins it.
const GAP: [bool; 5] = [true, false, false, false, true];

/// Columns (or rows) the gap moves along the edge for a tail leaning
/// west (or north).
const LEAN_SHIFT: usize = 2;

/// One of the four compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

/// Which edge a tail attaches to and which way its point leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TailDirection {
    edge: Compass,
    lean: Compass,
}

impl TailDirection {
    pub const NORTH_EAST: Self = Self::from_parts(Compass::North, Compass::East);
    pub const NORTH_WEST: Self = Self::from_parts(Compass::North, Compass::West);
    pub const SOUTH_EAST: Self = Self::from_parts(Compass::South, Compass::East);
    pub const SOUTH_WEST: Self = Self::from_parts(Compass::South, Compass::West);
    pub const EAST_NORTH: Self = Self::from_parts(Compass::East, Compass::North);
    pub const EAST_SOUTH: Self = Self::from_parts(Compass::East, Compass::South);
    pub const WEST_NORTH: Self = Self::from_parts(Compass::West, Compass::North);
    pub const WEST_SOUTH: Self = Self::from_parts(Compass::West, Compass::South);

    /// Every valid direction.
    pub const ALL: [Self; 8] = [
        Self::NORTH_EAST,
        Self::NORTH_WEST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
        Self::EAST_NORTH,
        Self::EAST_SOUTH,
        Self::WEST_NORTH,
        Self::WEST_SOUTH,
    ];

    const fn from_parts(edge: Compass, lean: Compass) -> Self {
        Self { edge, lean }
    }

    /// Fails unless `lean` lies across `edge`.
    pub fn new(edge: Compass, lean: Compass) -> Result<Self> {
        if edge.is_vertical() == lean.is_vertical() {
            return Err(Error::InvalidCompass(
                [edge.letter(), lean.letter()].iter().collect(),
            ));
        }
        Ok(Self { edge, lean })
    }

    pub fn edge(self) -> Compass {
        self.edge
    }

    pub fn lean(self) -> Compass {
        self.lean
    }

    fn index(self) -> usize {
        match (self.edge, self.lean) {
            (Compass::North, Compass::East) => 0,
            (Compass::North, _) => 1,
            (Compass::South, Compass::East) => 2,
            (Compass::South, _) => 3,
            (Compass::East, Compass::North) => 4,
            (Compass::East, _) => 5,
            (Compass::West, Compass::North) => 6,
            (Compass::West, _) => 7,
        }
    }

    /// Offset of the border gap from the tail's own origin.
    fn gap_shift(self) -> usize {
        match self.lean {
            Compass::West | Compass::North => LEAN_SHIFT,
            Compass::East | Compass::South => 0,
        }
    }
}

impl FromStr for TailDirection {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let invalid = || Error::InvalidCompass(code.to_owned());

        let mut letters = code.chars();
        let (Some(edge), Some(lean), None) = (letters.next(), letters.next(), letters.next())
        else {
            return Err(invalid());
        };

        let edge = Compass::from_letter(edge).ok_or_else(invalid)?;
        let lean = Compass::from_letter(lean).ok_or_else(invalid)?;
        Self::new(edge, lean).map_err(|_| invalid())
    }
}

impl fmt::Display for TailDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.edge.letter(), self.lean.letter())
    }
}

/// The eight tail shapes, indexed by direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailSet {
    shapes: [PixelGrid; 8],
}

impl Default for TailSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TailSet {
    /// Derive all eight shapes from the `SE` tail.
    pub fn new() -> Self {
        let mut south_east = PixelGrid::new(SOUTH_EAST[0].len(), SOUTH_EAST.len());
        for (y, row) in SOUTH_EAST.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                south_east.set(x, y, cell == b'1');
            }
        }

        let south_west = south_east.reflect_horizontal();
        let east_south = south_east.transpose();
        let east_north = east_south.reflect_vertical();

        Self {
            shapes: [
                south_east.reflect_vertical(),
                south_west.reflect_vertical(),
                south_east.clone(),
                south_west,
                east_north.clone(),
                east_south.clone(),
                east_north.reflect_horizontal(),
                east_south.reflect_horizontal(),
            ],
        }
    }

    pub fn shape(&self, direction: TailDirection) -> &PixelGrid {
        &self.shapes[direction.index()]
    }

    /// Attach a tail to one edge of a bordered grid.
    ///
    /// `offset` is the column (for north and south edges) or row (for east
    /// and west edges) where the tail starts. A gap is cut in the border line
    /// so the tail opens into the balloon.
    ///
    /// The border line must be solid where the gap is cut, otherwise
    /// [`Error::MissingBorder`] is returned. The input grid is never modified.
    pub fn attach(
        &self,
        grid: &PixelGrid,
        direction: TailDirection,
        offset: usize,
    ) -> Result<PixelGrid> {
        let tail = self.shape(direction);
        let vertical = direction.edge.is_vertical();

        let (size, bound) = if vertical {
            (tail.width(), grid.width())
        } else {
            (tail.height(), grid.height())
        };
        if offset.checked_add(size).is_none_or(|end| end > bound) {
            return Err(Error::OffsetTooLarge {
                offset,
                size,
                bound,
            });
        }

        if grid.width() == 0 || grid.height() == 0 {
            return Err(Error::MissingBorder);
        }

        // Cells along the target edge which receive the gap
        let start = offset + direction.gap_shift();
        let cells: Vec<(usize, usize)> = match direction.edge {
            Compass::North => (start..start + GAP.len()).map(|x| (x, 0)).collect(),
            Compass::South => {
                let y = grid.height() - 1;
                (start..start + GAP.len()).map(|x| (x, y)).collect()
            }
            Compass::West => (start..start + GAP.len()).map(|y| (0, y)).collect(),
            Compass::East => {
                let x = grid.width() - 1;
                (start..start + GAP.len()).map(|y| (x, y)).collect()
            }
        };

        if cells.iter().any(|&(x, y)| grid.get(x, y) != Some(true)) {
            return Err(Error::MissingBorder);
        }

        let mut out = grid.clone();
        for (&(x, y), &on) in cells.iter().zip(&GAP) {
            out.set(x, y, on);
        }

        if vertical {
            let mut band = PixelGrid::new(grid.width(), tail.height());
            band.blit(tail, offset, 0);
            match direction.edge {
                Compass::North => out.prepend_rows(&band),
                _ => out.append_rows(&band),
            }
        } else {
            let mut band = PixelGrid::new(tail.width(), grid.height());
            band.blit(tail, 0, offset);
            match direction.edge {
                Compass::West => out.prepend_columns(&band),
                _ => out.append_columns(&band),
            }
        }

        debug!(
            %direction,
            offset,
            width = out.width(),
            height = out.height(),
            "attached tail"
        );

        Ok(out)
    }
}

/// Attach a tail using a freshly built [`TailSet`].
///
/// Sessions which attach many tails should keep a [`TailSet`] and call
/// [`TailSet::attach`] instead.
pub fn attach_tail(grid: &PixelGrid, direction: TailDirection, offset: usize) -> Result<PixelGrid> {
    TailSet::new().attach(grid, direction, offset)
}
