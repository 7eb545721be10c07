//! Fail-soft functions over game representations.
//!
//! A game representation is the string `{cols}x{rows}/{hex}` (see [`crate::Game`]). It is the
//! form a game takes outside this crate, eg, in a shared link, so it may have been hand-edited or
//! truncated. Nothing in this module fails on bad input. A string with no usable representation
//! in it is read as `1x1/0`, a single dead cell, and coordinates off the board read as dead and
//! toggle nothing. Use [`crate::Game`] and its [`std::str::FromStr`] implementation to get an
//! error instead.
//!
//! The representation is searched for anywhere in the string and the hex digits may be in either
//! case, so `"/3X3/1E2?ssr"` reads as `"3x3/1e2"`. Output is always canonical.

use crate::aliases::{LargeBitfield, LargeGame};
use crate::bitfield::BitField;
use crate::cell_iter::CellIter;
use crate::cells::{Coords, Dimensions};

/// The canonical external form of a game, `{cols}x{rows}/{hex}`.
pub type GameRepresentation = String;

fn decode(representation: &str) -> LargeGame {
    LargeGame::find_in(representation).unwrap_or_else(|e| {
        log::debug!("Reading {representation:?} as an empty 1x1 game: {e}");
        LargeGame::default()
    })
}

/// Format a board as `{cols}x{rows}/{hex}`, hex in lowercase without a prefix.
pub fn serialize(dims: Dimensions, board: &LargeBitfield) -> GameRepresentation {
    format!("{dims}/{}", board.to_hex())
}

/// Read the dimensions and board from a representation. Bits beyond the last cell are dropped.
pub fn deserialize(representation: &str) -> (Dimensions, LargeBitfield) {
    decode(representation).into_parts()
}

/// Whether the cell at the given coordinates is alive. See [`crate::Game::get`].
pub fn get(representation: &str, coords: impl Into<Coords>) -> bool {
    decode(representation).get(coords)
}

/// Flip the cell at the given coordinates. See [`crate::Game::toggle`].
pub fn toggle(representation: &str, coords: impl Into<Coords>) -> GameRepresentation {
    decode(representation).toggle(coords).to_string()
}

/// Advance the game by one generation:
///
/// * a live cell with two or three live neighbours survives;
/// * a dead cell with exactly three live neighbours comes alive;
/// * every other cell is dead in the next generation.
///
/// Cells beyond the edges of the board count as dead neighbours.
pub fn next(representation: &str) -> GameRepresentation {
    decode(representation).next().to_string()
}

/// Iterate over every cell of the game in row order. Each call decodes the representation afresh.
pub fn enumerate(representation: &str) -> CellIter<LargeBitfield> {
    decode(representation).into_iter()
}

/// Render the game as a grid of `x` and `.`. See [`crate::Game::to_text`].
pub fn to_text(representation: &str) -> String {
    decode(representation).to_text()
}

/// Read a grid of `x` and `.` into a representation. A grid that cannot be read (empty, or with
/// rows of different lengths) gives `1x1/0`. See [`crate::Game::from_text`].
pub fn from_text(text: &str) -> GameRepresentation {
    LargeGame::from_text(text)
        .unwrap_or_else(|e| {
            log::debug!("Reading grid as an empty 1x1 game: {e}");
            LargeGame::default()
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use test_log::test;

    const MALFORMED: [&str; 6] = ["3x3/g", "3x/0", "3", "", "0x0/1", "x3/1"];

    #[test]
    fn test_malformed_falls_back() {
        for s in MALFORMED {
            assert_eq!(deserialize(s), (Dimensions::default(), BigUint::default()));
            assert!(!get(s, (0, 0)));
            assert_eq!(toggle(s, (0, 0)), "1x1/1");
            assert_eq!(toggle(s, (1, 0)), "1x1/0");
            assert_eq!(next(s), "1x1/0");
            assert_eq!(enumerate(s).count(), 1);
            assert_eq!(to_text(s), ".");
        }
        assert_eq!(toggle("99999999999999999999999x2/1", (0, 0)), "1x1/1");
        assert_eq!(from_text("x .\nx"), "1x1/0");
        assert_eq!(from_text(""), "1x1/0");
    }

    #[test]
    fn test_round_trip() {
        for s in ["3x3/1e2", "1x1/0", "13x13/0", "4x4/8421"] {
            let (dims, board) = deserialize(s);
            assert_eq!(serialize(dims, &board), s);
        }
        let (dims, board) = deserialize("link/3X3/01E2#top");
        assert_eq!(serialize(dims, &board), "3x3/1e2");
        let (dims, board) = deserialize("2x2/fff");
        assert_eq!(serialize(dims, &board), "2x2/f");
    }

    #[test]
    fn test_huge_board_is_not_materialised() {
        let huge = "1000000000x1000000000/1";
        assert!(get(huge, (0, 0)));
        assert!(!get(huge, (5, 7)));
        assert_eq!(toggle(huge, (1, 0)), "1000000000x1000000000/3");
        let (dims, board) = deserialize(huge);
        assert_eq!(dims, Dimensions::new(1_000_000_000, 1_000_000_000).unwrap());
        assert_eq!(board, BigUint::from(1u8));
        assert_eq!(enumerate(huge).take(2).filter(|c| c.value).count(), 1);
    }

    #[test]
    fn test_serialize() {
        let dims = Dimensions::new(3, 3).unwrap();
        assert_eq!(serialize(dims, &BigUint::from(0b111_100_010u32)), "3x3/1e2");
        assert_eq!(serialize(dims, &BigUint::default()), "3x3/0");
    }

    #[test]
    fn test_canonical_output() {
        assert_eq!(toggle("3X3/1E2", (1, 0)), "3x3/1e0");
        assert_eq!(toggle("3x3/1e2", (4, 5)), "3x3/1e2");
        assert_eq!(next("3x3/1E2"), "3x3/1a8");
    }

    #[test]
    fn test_text() {
        let grid = ". x .\n. . x\nx x x";
        assert_eq!(from_text(grid), "3x3/1e2");
        assert_eq!(to_text(&from_text(grid)), grid);
    }
}
