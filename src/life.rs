//! Advancing a board by one generation, for every cell at once.
//!
//! The board is a single [`BitField`] with cell `(x, y)` at bit `y * cols + x`. Shifting the whole
//! field by `cols` bits moves every cell one row; shifting by one bit moves it one column. Each of
//! the eight shifted copies of the board holds, at every cell, whether one particular neighbour of
//! that cell is alive. The copies are summed with a saturating counter that is itself made of
//! bitfields, one per count threshold, so no per-cell integer is ever materialised.
//!
//! The grid is not toroidal. A horizontal shift would carry the last cell of one row into the
//! first cell of the next, so the column that would wrap is masked off before shifting. The
//! vertical shifts only need the same treatment towards the high end of the field, where the last
//! row must not grow the field beyond the board; the low end just drops off.

use crate::bitfield::BitField;
use crate::cells::Dimensions;

/// Masks used to stop shifted boards wrapping around the edges.
#[derive(Debug, Clone)]
pub(crate) struct EdgeMasks<B: BitField> {
    cols: usize,
    except_left_col: B,
    except_right_col: B,
    except_last_row: B,
}

impl<B: BitField> EdgeMasks<B> {
    pub(crate) fn new(dims: Dimensions) -> Self {
        let cells = dims.cell_count();
        let valid = B::low_mask(cells);
        let mut left_col = B::default();
        for row in 0..dims.rows() {
            left_col.set_bit(row * dims.cols());
        }
        let right_col = left_col.shifted_left(dims.cols() - 1);
        Self {
            cols: dims.cols(),
            except_left_col: valid.clone().and_not(left_col),
            except_right_col: valid.and_not(right_col),
            except_last_row: B::low_mask(cells - dims.cols()),
        }
    }

    /// Each cell takes the value of the cell below it.
    fn north(&self, board: &B) -> B {
        board.shifted_right(self.cols)
    }

    /// Each cell takes the value of the cell above it.
    fn south(&self, board: &B) -> B {
        (board.clone() & self.except_last_row.clone()).shifted_left(self.cols)
    }

    /// Each cell takes the value of the cell to its left.
    fn east(&self, board: &B) -> B {
        (board.clone() & self.except_right_col.clone()).shifted_left(1)
    }

    /// Each cell takes the value of the cell to its right.
    fn west(&self, board: &B) -> B {
        (board.clone() & self.except_left_col.clone()).shifted_right(1)
    }

    /// The eight neighbour boards, row by row: the three diagonals and verticals on one side, the
    /// two horizontals, then the three on the other side.
    pub(crate) fn neighbours(&self, board: &B) -> [B; 8] {
        let west = self.west(board);
        let east = self.east(board);
        [
            self.north(&west),
            self.north(board),
            self.north(&east),
            west.clone(),
            east.clone(),
            self.south(&west),
            self.south(board),
            self.south(&east),
        ]
    }
}

/// A saturating neighbour counter, one bit per cell per threshold. Adding a neighbour board
/// ripples a carry up through the thresholds, so after all eight boards each field holds exactly
/// the cells whose count reaches it.
#[derive(Debug, Clone, Default)]
pub(crate) struct NeighbourCount<B: BitField> {
    at_least_one: B,
    at_least_two: B,
    at_least_three: B,
    more_than_three: B,
}

impl<B: BitField> NeighbourCount<B> {
    pub(crate) fn add(&mut self, neighbour: B) {
        self.more_than_three |= self.at_least_three.clone() & neighbour.clone();
        self.at_least_three |= self.at_least_two.clone() & neighbour.clone();
        self.at_least_two |= self.at_least_one.clone() & neighbour.clone();
        self.at_least_one |= neighbour;
    }

    /// Apply the rules to `board`: a cell is alive next generation iff it has two or three live
    /// neighbours and either is alive already or has three.
    pub(crate) fn apply(self, board: B) -> B {
        ((board | self.at_least_three) & self.at_least_two).and_not(self.more_than_three)
    }
}

/// Compute the next generation of `board`. Cells off the edge of the board count as dead. Bits at
/// or beyond `dims.cell_count()` must be clear in `board` and are clear in the result.
pub fn advance<B: BitField>(dims: Dimensions, board: &B) -> B {
    let masks = EdgeMasks::new(dims);
    let mut count = NeighbourCount::default();
    for neighbour in masks.neighbours(board) {
        count.add(neighbour);
    }
    count.apply(board.clone())
}
