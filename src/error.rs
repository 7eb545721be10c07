use std::num::ParseIntError;
use thiserror::Error;

/// Errors returned by the strict parsing and construction functions. The fail-soft functions in
/// [`crate::representation`] never return these; they fall back to the default game instead.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// The given string is not of the form `{cols}x{rows}/{hex}` (or `{cols}x{rows}` for
    /// dimensions).
    #[error("not a valid game representation: {0:?}")]
    BadString(String),
    /// Could not parse an integer from a string. This variant wraps the [`ParseIntError`] that was
    /// returned when trying to parse.
    #[error("bad integer: {0}")]
    BadInt(#[from] ParseIntError),
    /// The board part of a representation is not a hexadecimal number that fits the backing bit
    /// field.
    #[error("bad hexadecimal board: {0:?}")]
    BadHex(String),
    /// Either the number of columns or the number of rows is zero.
    #[error("boards must have at least one column and one row")]
    ZeroDimension,
    /// The board has more cells than the backing bit field can hold.
    #[error("board has {cells} cells but the bit field only holds {capacity}")]
    BoardTooLarge { cells: usize, capacity: usize },
    /// Tried to parse a multi-line string but encountered a line that was not the expected length.
    /// The given `usize` is the actual length.
    #[error("row has {0} cells, which does not match the first row")]
    BadLineLen(usize),
    /// Tried to parse an empty string.
    #[error("empty string")]
    EmptyString,
}
