//! Conway's Game of Life on a finite grid, with the whole board packed into a single bit field
//! and each generation computed for every cell at once using bitwise operations.
//!
//! The string-level API in [`representation`] works on `{cols}x{rows}/{hex}` strings and never
//! fails; [`Game`] is the typed value underneath it.
//!
//! ```
//! use lifebits::representation::{get, next, toggle};
//!
//! let blinker = "3x3/38";
//! assert_eq!(next(blinker), "3x3/92");
//! assert_eq!(next(&next(blinker)), blinker);
//! assert!(get(&toggle(blinker, (0, 0)), (0, 0)));
//! ```

pub mod aliases;
pub mod bitfield;
mod cell_iter;
mod cells;
mod error;
mod game;
pub mod life;
pub mod preset;
pub mod representation;
mod serde_utils;

pub use crate::{
    bitfield::BitField,
    cell_iter::CellIter,
    cells::{Cell, Coords, Dimensions},
    error::ParseError,
    game::Game,
    representation::GameRepresentation,
};
