//! This module contains the logic for solving Sudoku.
//!
//! The engine works in two phases. [propagate] deterministically fills every
//! cell that has exactly one legal digit, repeating until no such cell
//! remains, and reports the candidates of all still-undetermined cells in a
//! [CandidateMap]. [search] resolves boards that propagation alone cannot
//! complete by trying the candidates of the most-constrained cell on
//! independent board copies, re-running propagation after every trial
//! placement. The [solve] entry point wires both phases together behind the
//! raw-grid interface.

use crate::{Board, SIZE};
use crate::error::SudokuResult;
use crate::util::DigitSet;

use std::collections::BTreeMap;

/// The value assigned to every cell of the grid returned by [solve] when the
/// puzzle has no solution. It lies outside the domain of valid cell values,
/// so an unsolvable result can never be confused with a solved or partial
/// grid.
pub const UNSOLVABLE_MARKER: i8 = -1;

/// The candidates of all cells that propagation could not determine, keyed
/// by `(column, row)`. A cell with exactly one candidate never appears here,
/// since propagation commits it instead. A cell with an *empty* candidate
/// set marks a contradiction: no digit can legally fill it, so the board
/// cannot be completed.
///
/// The map is rebuilt from scratch on every propagation pass and never
/// shared between board copies. `BTreeMap` keeps the iteration order
/// deterministic, which makes the whole solver deterministic.
pub type CandidateMap = BTreeMap<(usize, usize), DigitSet>;

/// An enumeration of the ways a [search] call can end.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// The board was completed successfully. The full board is wrapped in
    /// this instance.
    Solved(Board),

    /// Some empty cell has no legal digit, so the board in its current state
    /// cannot be completed.
    Unsolvable,

    /// Every candidate of the branched cell was tried without finding a
    /// solution. For the root call this is equivalent to [Solution::Unsolvable];
    /// it is kept separate so intermediate recursion levels do not have to
    /// guess the outcome from the state of the board.
    Exhausted
}

/// Fills every cell of the given board that has exactly one legal digit,
/// repeating the full scan until no such cell remains. Returns the candidate
/// map of the final pass, covering all cells that are still empty.
///
/// A digit placed early in a pass restricts the candidates of cells scanned
/// later in the same pass, since legality checks read the live board. That
/// only affects how fast the fixpoint is reached, not which board it is:
/// whenever a pass places at least one digit, the candidate map built so far
/// is discarded and a fresh scan is started.
///
/// Termination is guaranteed, as every pass either places at least one digit
/// (and at most 81 can be placed) or is the last one.
pub fn propagate(board: &mut Board) -> CandidateMap {
    loop {
        let mut candidates = CandidateMap::new();
        let mut changes = 0;

        for row in 0..SIZE {
            for column in 0..SIZE {
                if board.get_cell(column, row).unwrap().is_some() {
                    continue;
                }

                let mut options = DigitSet::new();

                for number in 1..=SIZE {
                    if board.is_legal_move(column, row, number).unwrap() {
                        options.insert(number);
                    }
                }

                if options.len() == 1 {
                    let number = options.iter().next().unwrap();
                    board.set_cell(column, row, number).unwrap();
                    changes += 1;
                }
                else {
                    candidates.insert((column, row), options);
                }
            }
        }

        if changes == 0 {
            return candidates;
        }
    }
}

/// Resolves a board that propagation alone could not complete, by
/// trial-and-error on the cell with the fewest candidates.
///
/// `candidates` must be the map produced by running [propagate] on `board`.
/// The search picks the first cell (in map order) whose candidate count is
/// minimal and tries its candidates in ascending digit order. Every trial
/// placement happens on an independent clone of the board, which is then
/// propagated and, if still incomplete, searched recursively. The first
/// completed board encountered is returned as [Solution::Solved]; branches
/// that end in [Solution::Unsolvable] or [Solution::Exhausted] are simply
/// abandoned in favor of the next candidate.
///
/// # Panics
///
/// If `candidates` is empty. A board with no undetermined cells is full
/// after propagation, so such a call is a programming error.
pub fn search(board: &Board, candidates: &CandidateMap) -> Solution {
    let min_len = candidates.values()
        .map(DigitSet::len)
        .min()
        .expect("search requires at least one undetermined cell");

    if min_len == 0 {
        return Solution::Unsolvable;
    }

    let (&(column, row), options) = candidates.iter()
        .find(|(_, options)| options.len() == min_len)
        .unwrap();

    for number in options {
        let mut branch = board.clone();
        branch.set_cell(column, row, number).unwrap();
        let branch_candidates = propagate(&mut branch);

        if branch.is_full() {
            return Solution::Solved(branch);
        }

        if let Solution::Solved(solved) = search(&branch, &branch_candidates) {
            return Solution::Solved(solved);
        }
    }

    Solution::Exhausted
}

/// Attempts to complete the given board, combining [propagate] and [search].
/// The board is consumed so the caller cannot observe the intermediate state
/// left behind by propagation.
pub fn solve_board(mut board: Board) -> Solution {
    let candidates = propagate(&mut board);

    if board.is_full() {
        return Solution::Solved(board);
    }

    search(&board, &candidates)
}

/// Returns the grid that signals an unsolvable puzzle: every cell holds
/// [UNSOLVABLE_MARKER].
pub fn unsolvable_grid() -> [[i8; SIZE]; SIZE] {
    [[UNSOLVABLE_MARKER; SIZE]; SIZE]
}

/// Solves a Sudoku puzzle given as a raw grid of `i8` values, where 0
/// denotes an empty cell and 1 to 9 denote placed digits.
///
/// If the puzzle has a solution, the completed grid is returned. If it has
/// none, the result is the grid produced by [unsolvable_grid], in which
/// every cell equals [UNSOLVABLE_MARKER].
///
/// # Errors
///
/// `SudokuError::InvalidInput` if the grid contains a value outside the
/// range 0 to 9 or two equal digits that share a row, column, or block. See
/// [Board::from_values].
pub fn solve(values: &[[i8; SIZE]; SIZE])
        -> SudokuResult<[[i8; SIZE]; SIZE]> {
    let board = Board::from_values(values)?;

    match solve_board(board) {
        Solution::Solved(solved) => Ok(solved.to_values()),
        Solution::Unsolvable | Solution::Exhausted => Ok(unsolvable_grid())
    }
}
