// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand solver for classic 9x9
//! Sudoku. It supports the following key features:
//!
//! * Parsing and printing Sudoku boards
//! * Checking legality of moves and consistency of boards according to the
//! standard row, column, and block rules
//! * Solving Sudoku by constraint propagation (repeatedly committing cells
//! with a single remaining candidate) combined with backtracking search over
//! the most-constrained cell
//!
//! # Parsing and printing boards
//!
//! See [Board::parse] for the exact format of a board code.
//!
//! Codes can be used to exchange boards, while pretty prints can be used to
//! display a board in a clearer manner. An example of how to parse and
//! display a board is provided below.
//!
//! ```
//! use sudoku_classic::Board;
//!
//! let board = Board::parse("\
//!     2, , , , , , , , ,\
//!      , ,3, , , , , , ,\
//!      , , , ,4, , , , ,\
//!      , , , , , ,5, , ,\
//!      , , , , , , , , ,\
//!      , ,6, , , , , , ,\
//!      , , , , ,7, , , ,\
//!      ,8, , , , , , , ,\
//!      , , , , , , , ,9").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Checking moves
//!
//! [Board::is_legal_move] indicates whether a digit can be placed in a cell
//! without duplicating a digit already present in the same row, column, or
//! 3x3 block.
//!
//! ```
//! use sudoku_classic::Board;
//!
//! let mut board = Board::new();
//! board.set_cell(0, 0, 5).unwrap();
//!
//! // Another 5 in the same row is not allowed.
//! assert!(!board.is_legal_move(8, 0, 5).unwrap());
//!
//! // A 5 in an unrelated cell is fine.
//! assert!(board.is_legal_move(8, 8, 5).unwrap());
//! ```
//!
//! # Solving Sudoku
//!
//! The [solver] module contains the solving engine. The easiest way to use
//! it is the [solve](solver::solve) entry point, which takes a raw grid of
//! `i8` values (0 for empty cells) and returns either the completed grid or
//! a grid in which every cell is -1, indicating that no solution exists.
//!
//! ```
//! use sudoku_classic::Board;
//! use sudoku_classic::solver;
//!
//! let puzzle = Board::parse("\
//!      , ,1, , ,7,3,6, ,\
//!     7,2, , ,8, ,5, ,9,\
//!      ,8, , ,3,1, , , ,\
//!      , , ,6,7, , ,3,5,\
//!     9, ,5,8, , , ,7, ,\
//!     2,6, , ,1, , , ,4,\
//!     3, , ,1,5, , ,4,6,\
//!      ,7,4, , ,3, ,5,2,\
//!     5,1, ,7, ,4,8, , ").unwrap();
//! let solution = Board::parse("\
//!     4,5,1,2,9,7,3,6,8,\
//!     7,2,3,4,8,6,5,1,9,\
//!     6,8,9,5,3,1,4,2,7,\
//!     1,4,8,6,7,9,2,3,5,\
//!     9,3,5,8,4,2,6,7,1,\
//!     2,6,7,3,1,5,9,8,4,\
//!     3,9,2,1,5,8,7,4,6,\
//!     8,7,4,9,6,3,1,5,2,\
//!     5,1,6,7,2,4,8,9,3").unwrap();
//!
//! assert_eq!(Ok(solution.to_values()), solver::solve(&puzzle.to_values()));
//! ```
//!
//! If the input grid itself is malformed (values outside 0 to 9, or two
//! equal digits sharing a row, column, or block), the entry point rejects it
//! with [SudokuError::InvalidInput](error::SudokuError::InvalidInput)
//! instead of searching for a solution.

pub mod error;
pub mod solver;
pub mod util;


use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The width and height of one block of the board.
pub const BLOCK_SIZE: usize = 3;

/// The width and height of the board, that is, the number of cells on one
/// axis.
pub const SIZE: usize = BLOCK_SIZE * BLOCK_SIZE;

const CELL_COUNT: usize = SIZE * SIZE;

/// A Sudoku board is composed of 81 cells that are organized into nine rows,
/// nine columns, and nine 3x3 blocks. Each cell may or may not be occupied
/// by a digit from 1 to 9.
///
/// A board does not prevent illegal configurations: [Board::set_cell] places
/// any valid digit in any cell. Callers which need to maintain the Sudoku
/// rules check [Board::is_legal_move] before placing, as the
/// [solver](crate::solver) does. Whole-board consistency can be queried with
/// [Board::is_consistent].
///
/// Boards have value semantics: cloning one yields a fully independent copy,
/// which is what the backtracking search relies on to isolate its branches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    cells: [Option<usize>; CELL_COUNT]
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &Board, y: usize) -> String {
    line('║', '║', '│', |x| to_char(board.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

impl Board {

    /// Creates a new, empty board.
    pub fn new() -> Board {
        Board {
            cells: [None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a board. The code is a comma-separated list of
    /// 81 entries, which are either empty or a digit from 1 to 9. The entries
    /// are assigned left-to-right, top-to-bottom, where each row is completed
    /// before the next one is started. Whitespace in the entries is ignored
    /// to allow for more intuitive formatting.
    ///
    /// As an example, the code `1, ,2, ,...` (with 81 entries in total)
    /// places a 1 in the top-left cell and a 2 in the third cell of the top
    /// row.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<Board> {
        let numbers: Vec<&str> = code.split(',').collect();

        if numbers.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut board = Board::new();

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            board.cells[i] = Some(number);
        }

        Ok(board)
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [Board::parse]. That is, a board that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_classic::Board;
    ///
    /// let mut board = Board::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// board.set_cell(1, 1, 4).unwrap();
    /// board.set_cell(1, 2, 5).unwrap();
    ///
    /// let board_str = board.to_parseable_string();
    /// let board_parsed = Board::parse(board_str.as_str()).unwrap();
    /// assert_eq!(board, board_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Creates a board from a raw grid of `i8` values, where 0 denotes an
    /// empty cell and 1 to 9 denote placed digits. This is the validated
    /// entrance for caller-supplied grids: values outside the range 0 to 9
    /// and grids in which two equal digits share a row, column, or block are
    /// rejected.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidInput` if the grid contains an out-of-range value
    /// or violates the row, column, or block uniqueness rules.
    pub fn from_values(values: &[[i8; SIZE]; SIZE]) -> SudokuResult<Board> {
        let mut board = Board::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                let value = values[row][column];

                if value < 0 || value > SIZE as i8 {
                    return Err(SudokuError::InvalidInput);
                }

                if value > 0 {
                    board.cells[index(column, row)] = Some(value as usize);
                }
            }
        }

        if !board.is_consistent() {
            return Err(SudokuError::InvalidInput);
        }

        Ok(board)
    }

    /// Converts the board into a raw grid of `i8` values, where 0 denotes an
    /// empty cell and 1 to 9 denote placed digits. This is the inverse of
    /// [Board::from_values].
    pub fn to_values(&self) -> [[i8; SIZE]; SIZE] {
        let mut values = [[0i8; SIZE]; SIZE];

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(number) = self.cells[index(column, row)] {
                    values[row][column] = number as i8;
                }
            }
        }

        values
    }

    /// Gets the total size of the board on one axis (horizontally or
    /// vertically). This is always [SIZE], provided as a method to avoid
    /// magic numbers in consuming code.
    pub fn size(&self) -> usize {
        SIZE
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten. No legality check is performed; callers which need to
    /// maintain the Sudoku rules check [Board::is_legal_move] first.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    fn check_row(&self, column: usize, row: usize, number: usize) -> bool {
        for other_column in 0..SIZE {
            if other_column != column &&
                    self.has_number(other_column, row, number).unwrap() {
                return false;
            }
        }

        true
    }

    fn check_column(&self, column: usize, row: usize, number: usize) -> bool {
        for other_row in 0..SIZE {
            if other_row != row &&
                    self.has_number(column, other_row, number).unwrap() {
                return false;
            }
        }

        true
    }

    fn check_block(&self, column: usize, row: usize, number: usize) -> bool {
        let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
        let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

        for other_row in block_row..(block_row + BLOCK_SIZE) {
            for other_column in block_column..(block_column + BLOCK_SIZE) {
                if (other_row != row || other_column != column) &&
                        self.has_number(other_column, other_row, number)
                            .unwrap() {
                    return false;
                }
            }
        }

        true
    }

    /// Indicates whether the given number can be placed in the cell at the
    /// given position without duplicating a digit already present in another
    /// cell of the same row, column, or 3x3 block. The content of the queried
    /// cell itself is ignored, so this can also be used to re-check an
    /// already filled cell.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check. Must be in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn is_legal_move(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        let legal_row = self.check_row(column, row, number);
        let legal_column = self.check_column(column, row, number);
        let legal_block = self.check_block(column, row, number);
        Ok(legal_row && legal_column && legal_block)
    }

    /// Indicates whether this board is full, i.e. every cell is filled with
    /// a number.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this board is empty, i.e. no cell is filled with a
    /// number.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Counts the number of clues given by this board, that is, the number
    /// of non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this board is consistent, that is, no filled cell
    /// duplicates a digit present in another cell of the same row, column,
    /// or block. Empty cells are ignored, so a consistent board is not
    /// necessarily solvable.
    pub fn is_consistent(&self) -> bool {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(number) = self.cells[index(column, row)] {
                    if !self.is_legal_move(column, row, number).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>; CELL_COUNT] {
        &self.cells
    }

    /// Gets a mutable reference to the array which holds the cells. They are
    /// in left-to-right, top-to-bottom order, where rows are together. No
    /// validation is performed on changes made through this reference.
    pub fn cells_mut(&mut self) -> &mut [Option<usize>; CELL_COUNT] {
        &mut self.cells
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> String {
        board.to_parseable_string()
    }
}

impl TryFrom<String> for Board {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<Board> {
        Board::parse(code.as_str())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let board_res = Board::parse("\
            1, , ,2, , , , , ,\
             ,3, , ,4, , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , ,5, , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , ,6, , ,\
             , , , , , , , ,7");

        if let Ok(board) = board_res {
            assert_eq!(Some(1), board.get_cell(0, 0).unwrap());
            assert_eq!(Some(2), board.get_cell(3, 0).unwrap());
            assert_eq!(Some(3), board.get_cell(1, 1).unwrap());
            assert_eq!(Some(4), board.get_cell(4, 1).unwrap());
            assert_eq!(Some(5), board.get_cell(4, 4).unwrap());
            assert_eq!(Some(6), board.get_cell(6, 7).unwrap());
            assert_eq!(Some(7), board.get_cell(8, 8).unwrap());
            assert_eq!(None, board.get_cell(1, 0).unwrap());
            assert_eq!(None, board.get_cell(8, 0).unwrap());
            assert_eq!(7, board.count_clues());
        }
        else {
            panic!("Parsing valid board failed.");
        }
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            Board::parse("1,2,3"));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = "#".to_owned();

        for _ in 1..CELL_COUNT {
            code.push(',');
        }

        assert_eq!(Err(SudokuParseError::NumberFormatError),
            Board::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_number() {
        let mut code = "10".to_owned();

        for _ in 1..CELL_COUNT {
            code.push(',');
        }

        assert_eq!(Err(SudokuParseError::InvalidNumber),
            Board::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut board = Board::new();
        board.set_cell(0, 0, 1).unwrap();
        board.set_cell(4, 2, 9).unwrap();
        board.set_cell(8, 8, 5).unwrap();

        let code = board.to_parseable_string();

        assert_eq!(board, Board::parse(code.as_str()).unwrap());
    }

    #[test]
    fn set_cell_validates_input() {
        let mut board = Board::new();

        assert_eq!(Err(SudokuError::OutOfBounds), board.set_cell(9, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), board.set_cell(0, 9, 1));
        assert_eq!(Err(SudokuError::InvalidNumber), board.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), board.set_cell(0, 0, 10));
    }

    #[test]
    fn row_conflict_is_illegal() {
        let mut board = Board::new();
        board.set_cell(2, 4, 6).unwrap();

        assert!(!board.is_legal_move(7, 4, 6).unwrap());
        assert!(board.is_legal_move(7, 4, 5).unwrap());
        assert!(board.is_legal_move(7, 5, 6).unwrap());
    }

    #[test]
    fn column_conflict_is_illegal() {
        let mut board = Board::new();
        board.set_cell(3, 1, 2).unwrap();

        assert!(!board.is_legal_move(3, 8, 2).unwrap());
        assert!(board.is_legal_move(3, 8, 4).unwrap());
        assert!(board.is_legal_move(4, 8, 2).unwrap());
    }

    #[test]
    fn block_conflict_is_illegal() {
        let mut board = Board::new();
        board.set_cell(6, 6, 8).unwrap();

        // (8, 8) shares the bottom-right block, but neither row nor column.
        assert!(!board.is_legal_move(8, 8, 8).unwrap());
        assert!(board.is_legal_move(8, 8, 1).unwrap());
        assert!(board.is_legal_move(5, 8, 8).unwrap());
    }

    #[test]
    fn legal_move_ignores_queried_cell() {
        let mut board = Board::new();
        board.set_cell(4, 4, 3).unwrap();

        assert!(board.is_legal_move(4, 4, 3).unwrap());
    }

    #[test]
    fn legal_move_validates_input() {
        let board = Board::new();

        assert_eq!(Err(SudokuError::OutOfBounds),
            board.is_legal_move(9, 0, 1));
        assert_eq!(Err(SudokuError::InvalidNumber),
            board.is_legal_move(0, 0, 0));
    }

    #[test]
    fn empty_board_state() {
        let board = Board::new();

        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(0, board.count_clues());
        assert!(board.is_consistent());
    }

    #[test]
    fn from_values_accepts_valid_grid() {
        let mut values = [[0i8; SIZE]; SIZE];
        values[0][0] = 5;
        values[8][8] = 5;

        let board = Board::from_values(&values).unwrap();

        assert_eq!(Some(5), board.get_cell(0, 0).unwrap());
        assert_eq!(Some(5), board.get_cell(8, 8).unwrap());
        assert_eq!(2, board.count_clues());
        assert_eq!(values, board.to_values());
    }

    #[test]
    fn from_values_rejects_out_of_range_values() {
        let mut values = [[0i8; SIZE]; SIZE];
        values[3][3] = 10;

        assert_eq!(Err(SudokuError::InvalidInput),
            Board::from_values(&values));

        values[3][3] = -1;

        assert_eq!(Err(SudokuError::InvalidInput),
            Board::from_values(&values));
    }

    #[test]
    fn from_values_rejects_row_duplicate() {
        let mut values = [[0i8; SIZE]; SIZE];
        values[0][1] = 5;
        values[0][7] = 5;

        assert_eq!(Err(SudokuError::InvalidInput),
            Board::from_values(&values));
    }

    #[test]
    fn from_values_rejects_block_duplicate() {
        let mut values = [[0i8; SIZE]; SIZE];
        values[0][0] = 9;
        values[2][2] = 9;

        assert_eq!(Err(SudokuError::InvalidInput),
            Board::from_values(&values));
    }

    #[test]
    fn serde_round_trip() {
        let board = Board::parse("\
            2, , , , , , , , ,\
             , ,3, , , , , , ,\
             , , , ,4, , , , ,\
             , , , , , ,5, , ,\
             , , , , , , , , ,\
             , ,6, , , , , , ,\
             , , , , ,7, , , ,\
             ,8, , , , , , , ,\
             , , , , , , , ,9").unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(board, parsed);
    }
}
