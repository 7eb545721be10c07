use crate::bitfield::BitField;
use crate::cell_iter::CellIter;
use crate::cells::{Cell, Coords, Dimensions};
use crate::error::ParseError;
use crate::error::ParseError::{BadLineLen, BadString, BoardTooLarge, EmptyString};
use crate::life;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

lazy_static! {
    static ref REPRESENTATION: Regex =
        Regex::new(r"(?i)^([0-9]+)x([0-9]+)/([0-9a-f]+)$").expect("valid regex");
    static ref EMBEDDED_REPRESENTATION: Regex =
        Regex::new(r"(?i)([0-9]+)x([0-9]+)/([0-9a-f]+)").expect("valid regex");
}

/// A single Game of Life board: its [`Dimensions`] and the state of every cell, packed into one
/// [`BitField`]. See [`crate::aliases`] for concrete types.
///
/// A `Game` is a value. [`Game::toggle`] and [`Game::next`] return a new game and leave `self`
/// alone. Bits at or beyond [`Dimensions::cell_count`] are always clear.
///
/// The canonical text form (see [`Display`] and [`FromStr`]) is `{cols}x{rows}/{hex}`, where
/// `hex` is the board as a lowercase hexadecimal number with bit 0 being the top left cell. For
/// example, `"3x3/1e2"` is
///
/// ```text
/// . x .
/// . . x
/// x x x
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Game<B: BitField> {
    dims: Dimensions,
    board: B,
}

impl<B: BitField> Game<B> {
    /// Create a new game. Any bits of `board` beyond the last cell are cleared. Fails if the
    /// board has more cells than `B` can hold.
    pub fn new(dims: Dimensions, board: B) -> Result<Self, ParseError> {
        let cells = dims.cell_count();
        if !B::fits(cells) {
            return Err(BoardTooLarge {
                cells,
                capacity: B::CAPACITY.unwrap_or(usize::MAX),
            });
        }
        // Only mask when there are bits past the last cell.
        let board = if board.bit_len() > cells as u64 {
            board & B::low_mask(cells)
        } else {
            board
        };
        Ok(Self { dims, board })
    }

    /// Create a game where every cell is dead.
    pub fn empty(dims: Dimensions) -> Result<Self, ParseError> {
        Self::new(dims, B::default())
    }

    /// Create a game where exactly the given cells are alive. Coordinates that are not on the
    /// board are ignored.
    pub fn with_live_cells<C: Into<Coords>>(
        dims: Dimensions,
        live: impl IntoIterator<Item = C>,
    ) -> Result<Self, ParseError> {
        let mut game = Self::empty(dims)?;
        for coords in live {
            let coords = coords.into();
            if let Some(i) = dims.index(coords).filter(|_| dims.contains(coords)) {
                game.board.set_bit(i);
            }
        }
        Ok(game)
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn into_parts(self) -> (Dimensions, B) {
        (self.dims, self.board)
    }

    /// Whether the cell at the given coordinates is alive. Coordinates are turned into a linear
    /// index without checking them against the board, so a column past the right edge reads from
    /// the following row; an index past the last cell reads as dead.
    pub fn get(&self, coords: impl Into<Coords>) -> bool {
        self.dims
            .index(coords.into())
            .map_or(false, |i| self.board.bit(i))
    }

    /// Return a copy of the game with the cell at the given coordinates flipped. Coordinates map
    /// to a linear index as in [`Game::get`]; if the index is past the last cell the game is
    /// returned unchanged.
    pub fn toggle(&self, coords: impl Into<Coords>) -> Self {
        let mut toggled = self.clone();
        // Equivalent to masking the single-bit flip with the valid cells, without building a
        // field as wide as the index first.
        if let Some(i) = self.dims.index(coords.into()).filter(|&i| i < self.dims.cell_count()) {
            toggled.board ^= B::bit_mask(i);
        }
        toggled
    }

    /// Return the next generation of the game. The dimensions do not change.
    pub fn next(&self) -> Self {
        Self {
            dims: self.dims,
            board: life::advance(self.dims, &self.board),
        }
    }

    /// Iterate over every cell, see [`CellIter`].
    pub fn cells(&self) -> CellIter<B> {
        CellIter::new(self.clone())
    }

    /// The number of live cells.
    pub fn population(&self) -> u64 {
        self.board.count_ones()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// Parse a game from a grid of `x` (alive) and `.` (dead), one row per line. Every other
    /// character is ignored, as are lines with no cells, so labelled grids like
    ///
    /// ```text
    ///   0 . x .
    ///   1 . . x
    ///   2 x x x
    ///     0 1 2
    /// ```
    ///
    /// parse the same as the bare grid. All rows must be the same length.
    pub fn from_text(s: &str) -> Result<Self, ParseError> {
        let rows: Vec<Vec<bool>> = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter_map(|c| match c {
                        '.' => Some(false),
                        'x' | 'X' => Some(true),
                        _ => None,
                    })
                    .collect::<Vec<bool>>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        let cols = rows.first().ok_or(EmptyString)?.len();
        if let Some(bad_row) = rows.iter().find(|row| row.len() != cols) {
            return Err(BadLineLen(bad_row.len()));
        }
        let dims = Dimensions::new(cols, rows.len())?;
        let mut game = Self::empty(dims)?;
        for (i, &alive) in rows.iter().flatten().enumerate() {
            if alive {
                game.board.set_bit(i);
            }
        }
        Ok(game)
    }

    /// Return the board as a grid of `x` (alive) and `.` (dead), cells separated by single spaces
    /// and rows by newlines, with no trailing whitespace.
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity(self.dims.cell_count() * 2);
        for cell in self.cells() {
            if cell.x > 0 {
                s.push(' ');
            } else if cell.y > 0 {
                s.push('\n');
            }
            s.push(if cell.value { 'x' } else { '.' });
        }
        s
    }

    /// Parse the first `{cols}x{rows}/{hex}` found anywhere in `s`, ignoring whatever surrounds
    /// it.
    pub(crate) fn find_in(s: &str) -> Result<Self, ParseError> {
        let captures = EMBEDDED_REPRESENTATION
            .captures(s)
            .ok_or_else(|| BadString(s.to_string()))?;
        Self::from_captures(&captures)
    }

    fn from_captures(captures: &Captures) -> Result<Self, ParseError> {
        let dims = Dimensions::new(captures[1].parse()?, captures[2].parse()?)?;
        let cells = dims.cell_count();
        if !B::fits(cells) {
            return Err(BoardTooLarge {
                cells,
                capacity: B::CAPACITY.unwrap_or(usize::MAX),
            });
        }
        Self::new(dims, B::from_hex(&captures[3])?)
    }
}

impl<B: BitField> Default for Game<B> {
    /// A single dead cell, `1x1/0`.
    fn default() -> Self {
        Self {
            dims: Dimensions::default(),
            board: B::default(),
        }
    }
}

impl<B: BitField> FromStr for Game<B> {
    type Err = ParseError;

    /// Parse a game from its canonical form, `{cols}x{rows}/{hex}`. The hex digits may be in
    /// either case. Bits beyond the last cell are cleared.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = REPRESENTATION
            .captures(s)
            .ok_or_else(|| BadString(s.to_string()))?;
        Self::from_captures(&captures)
    }
}

impl<B: BitField> Display for Game<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.dims, self.board.to_hex())
    }
}

impl<B: BitField> IntoIterator for Game<B> {
    type Item = Cell;
    type IntoIter = CellIter<B>;

    fn into_iter(self) -> Self::IntoIter {
        CellIter::new(self)
    }
}

impl<B: BitField> IntoIterator for &Game<B> {
    type Item = Cell;
    type IntoIter = CellIter<B>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}
