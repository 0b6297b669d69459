//! This module contains some error and result definitions used in this crate.
//!
//! Errors raised by the evolutionary search live in the
//! [genetic](../genetic/index.html) module next to the types that produce
//! them.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not include errors that occur when
/// parsing a grid, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that a sequence of cells does not have the length required
    /// for a 9x9 grid.
    InvalidDimensions,

    /// Indicates that a cell holds or would be assigned a number outside the
    /// range 1 to 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid. This is the case if either is greater than or equal to 9.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `Sudoku` or
/// `SudokuGrid`.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// 9).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}
