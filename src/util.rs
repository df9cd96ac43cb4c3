//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! the candidate digits of a cell.

use crate::SIZE;

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask. Each
/// digit is represented by one bit in a `u16`. This generally has better
/// performance than a `HashSet` and makes cloning a candidate map cheap.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DigitSet {
    mask: u16
}

const FULL_MASK: u16 = (1 << SIZE) - 1;

fn digit_mask(digit: usize) -> u16 {
    assert!(digit >= 1 && digit <= SIZE, "digit outside the range [1, 9]");
    1u16 << (digit - 1)
}

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn new() -> DigitSet {
        DigitSet {
            mask: 0
        }
    }

    /// Creates a new `DigitSet` that contains all digits from 1 to 9.
    pub fn full() -> DigitSet {
        DigitSet {
            mask: FULL_MASK
        }
    }

    /// Creates a new `DigitSet` which contains only the given digit.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn singleton(digit: usize) -> DigitSet {
        DigitSet {
            mask: digit_mask(digit)
        }
    }

    /// Indicates whether this set contains the given digit.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn contains(&self, digit: usize) -> bool {
        self.mask & digit_mask(digit) > 0
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// not present before) and `false` otherwise.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn insert(&mut self, digit: usize) -> bool {
        let mask = digit_mask(digit);
        let changed = self.mask & mask == 0;
        self.mask |= mask;
        changed
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// present before) and `false` otherwise.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn remove(&mut self, digit: usize) -> bool {
        let mask = digit_mask(digit);
        let changed = self.mask & mask > 0;
        self.mask &= !mask;
        changed
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Indicates whether this set is empty, i.e. contains no digits.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns an iterator over the digits contained in this set in ascending
    /// order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            mask: self.mask
        }
    }
}

/// An iterator over the content of a [DigitSet], yielding digits in ascending
/// order.
pub struct DigitSetIter {
    mask: u16
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.mask == 0 {
            return None;
        }

        let digit = self.mask.trailing_zeros() as usize + 1;
        self.mask &= self.mask - 1;
        Some(digit)
    }
}

impl IntoIterator for &DigitSet {
    type Item = usize;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> DigitSetIter {
        self.iter()
    }
}
