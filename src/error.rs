//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing boards, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a Sudoku cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the Sudoku board. This is the case if they are greater than or equal
    /// to 9.
    OutOfBounds,

    /// Indicates that a grid provided by the caller is malformed, that is, it
    /// contains entries outside the range of valid cell values or two equal
    /// digits that share a row, column, or block.
    InvalidInput
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidNumber =>
                f.write_str("number outside the range [1, 9]"),
            SudokuError::OutOfBounds =>
                f.write_str("cell coordinates outside the board"),
            SudokuError::InvalidInput =>
                f.write_str("input grid is malformed or inconsistent")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [Board](../struct.Board.html) cell code.
#[derive(Clone, Debug, Eq, PartialEq)]
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

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                f.write_str("code does not contain exactly 81 cells"),
            SudokuParseError::NumberFormatError =>
                f.write_str("cell entry is not a number"),
            SudokuParseError::InvalidNumber =>
                f.write_str("cell entry outside the range [1, 9]")
        }
    }
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
