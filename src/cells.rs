use crate::error::ParseError;
use crate::error::ParseError::{BadString, ZeroDimension};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The size of a board, in columns and rows. Both are at least 1.
///
/// Cells are laid out row by row: the cell at column `x`, row `y` has linear index
/// `y * cols + x`, which is also the bit that stores it in the board's [`crate::BitField`].
/// The y-axis points down, so row 0 is the top of the board.
///
/// Dimensions can only be built through [`Dimensions::new`] (or parsing), so `cols * rows` is
/// always a positive `usize`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "UncheckedDimensions")
)]
pub struct Dimensions {
    cols: usize,
    rows: usize,
}

impl Dimensions {
    /// Create new dimensions, checking that neither side is zero and that the number of cells
    /// can be counted.
    pub fn new(cols: usize, rows: usize) -> Result<Self, ParseError> {
        if cols == 0 || rows == 0 {
            return Err(ZeroDimension);
        }
        if cols.checked_mul(rows).is_none() {
            return Err(BadString(format!("{cols}x{rows}")));
        }
        Ok(Self { cols, rows })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of cells on the board, ie, the number of meaningful bits.
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// The linear index of the given cell. This does not check the coordinates against the
    /// board: a column past the right edge runs on into the next row, exactly as the formula
    /// says. Returns `None` only if the index cannot be represented.
    pub fn index(&self, coords: Coords) -> Option<usize> {
        coords.y.checked_mul(self.cols)?.checked_add(coords.x)
    }

    /// The coordinates of the cell with the given linear index.
    pub fn coords(&self, index: usize) -> Coords {
        Coords::new(index % self.cols, index / self.cols)
    }

    /// Whether the given coordinates lie on the board.
    pub fn contains(&self, coords: Coords) -> bool {
        coords.x < self.cols && coords.y < self.rows
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { cols: 1, rows: 1 }
    }
}

impl FromStr for Dimensions {
    type Err = ParseError;

    /// Parse dimensions in the form `{cols}x{rows}`, eg, `"3x4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cols, rows) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| BadString(s.to_string()))?;
        if !is_decimal(cols) || !is_decimal(rows) {
            return Err(BadString(s.to_string()));
        }
        Self::new(cols.parse()?, rows.parse()?)
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Deserialized form of [`Dimensions`], checked with [`Dimensions::new`] before use.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UncheckedDimensions {
    cols: usize,
    rows: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedDimensions> for Dimensions {
    type Error = ParseError;

    fn try_from(value: UncheckedDimensions) -> Result<Self, Self::Error> {
        Self::new(value.cols, value.rows)
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// The location of a single cell, as column (`x`) and row (`y`). This is only a reference to a
/// location and says nothing about whether the cell is alive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coords {
    pub x: usize,
    pub y: usize,
}

impl Coords {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coords {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl From<Coords> for (usize, usize) {
    fn from(value: Coords) -> Self {
        (value.x, value.y)
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single cell as yielded by [`crate::CellIter`]: its location and whether it is alive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub value: bool,
}

impl Cell {
    pub fn coords(&self) -> Coords {
        Coords::new(self.x, self.y)
    }
}
