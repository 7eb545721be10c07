use crate::bitfield::BitField;
use crate::cells::{Cell, Dimensions};
use crate::game::Game;
use std::iter::FusedIterator;

/// Iterator over every cell of a board, dead or alive, in increasing linear index order (row by
/// row, left to right). It owns its copy of the game, so each call to [`Game::cells`] starts a
/// fresh pass and nothing but the current [`Cell`] is built per step.
#[derive(Debug, Clone)]
pub struct CellIter<B: BitField> {
    dims: Dimensions,
    board: B,
    index: usize,
}

impl<B: BitField> CellIter<B> {
    pub(crate) fn new(game: Game<B>) -> Self {
        let (dims, board) = game.into_parts();
        Self {
            dims,
            board,
            index: 0,
        }
    }
}

impl<B: BitField> Iterator for CellIter<B> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.dims.cell_count() {
            return None;
        }
        let coords = self.dims.coords(self.index);
        let value = self.board.bit(self.index);
        self.index += 1;
        Some(Cell {
            x: coords.x,
            y: coords.y,
            value,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dims.cell_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<B: BitField> ExactSizeIterator for CellIter<B> {}

impl<B: BitField> FusedIterator for CellIter<B> {}
