//! This module contains the strict validity checks for grids.
//!
//! A group (row, column, or block) is valid if no digit occurs in it twice.
//! Empty cells are ignored, so partially filled grids can be valid, and cell
//! contents outside the range 1 to 9 cannot occur because every way of
//! getting a digit into a [SudokuGrid] range-checks it.
//!
//! These checks are hard pass/fail queries, used for final-answer
//! verification. They are deliberately separate from the continuous scores
//! in the [fitness](../fitness/index.html) module: a candidate mid-evolution
//! is almost always invalid by these rules, and that must not stop the
//! search.

use crate::{GRID_SIZE, SudokuGrid};
use crate::util::DigitSet;

fn is_valid_group(cells: impl Iterator<Item = Option<usize>>) -> bool {
    let mut seen = DigitSet::new();

    for digit in cells.flatten() {
        if !seen.insert(digit) {
            return false;
        }
    }

    true
}

/// Indicates whether every row of the given grid is free of duplicate
/// digits.
pub fn are_valid_rows(grid: &SudokuGrid) -> bool {
    (0..GRID_SIZE).all(|row| is_valid_group(grid.row_cells(row)))
}

/// Indicates whether every column of the given grid is free of duplicate
/// digits.
pub fn are_valid_columns(grid: &SudokuGrid) -> bool {
    (0..GRID_SIZE).all(|column| is_valid_group(grid.column_cells(column)))
}

/// Indicates whether every block of the given grid is free of duplicate
/// digits.
pub fn are_valid_blocks(grid: &SudokuGrid) -> bool {
    (0..GRID_SIZE).all(|block| is_valid_group(grid.block_cells(block)))
}

/// Indicates whether the given grid satisfies the standard rules on all
/// three axes, i.e. [are_valid_rows], [are_valid_columns], and
/// [are_valid_blocks] all hold.
pub fn is_valid(grid: &SudokuGrid) -> bool {
    are_valid_rows(grid) && are_valid_columns(grid) && are_valid_blocks(grid)
}
