//! This module contains the logic for solving Sudoku by exhaustive search.
//!
//! Most importantly, this module contains the
//! [BacktrackingSolver](struct.BacktrackingSolver.html), together with the
//! [check_number] placement check it uses for pruning. The evolutionary
//! alternative lives in the [genetic](../genetic/index.html) and
//! [genome](../genome/index.html) modules.

use crate::{BLOCK_SIZE, GRID_SIZE, SudokuGrid};

fn check_row(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> bool {
    for other_column in 0..GRID_SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, number).unwrap() {
            return false;
        }
    }

    true
}

fn check_column(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> bool {
    for other_row in 0..GRID_SIZE {
        if other_row != row &&
                grid.has_number(column, other_row, number).unwrap() {
            return false;
        }
    }

    true
}

fn check_block(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> bool {
    let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
    let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

    for other_row in block_row..(block_row + BLOCK_SIZE) {
        for other_column in block_column..(block_column + BLOCK_SIZE) {
            if (other_column, other_row) != (column, row) &&
                    grid.has_number(other_column, other_row, number)
                        .unwrap() {
                return false;
            }
        }
    }

    true
}

/// Checks whether the given `number` would fit into the cell specified by
/// `column` and `row` in the `grid` without clashing with an equal number in
/// the same row, column, or block. The checked cell itself is skipped, so a
/// cell never clashes with its own content.
///
/// This function does *not* check whether `number` is a valid digit for the
/// grid; the grid's own mutators guarantee that for all stored content.
///
/// # Arguments
///
/// * `grid`: The grid into which the number shall be placed.
/// * `column`: The column (x-coordinate) of the candidate cell. Must be in
/// the range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the candidate cell. Must be in the
/// range `[0, 9[`.
/// * `number`: The candidate digit.
pub fn check_number(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    check_row(grid, column, row, number) &&
        check_column(grid, column, row, number) &&
        check_block(grid, column, row, number)
}

/// A perfect solver which fills grids by recursively testing all valid
/// digits for each empty cell, in row-major cell order and ascending digit
/// order. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// grid has many missing digits.
/// * It is deterministic and exhaustive: it succeeds exactly when a legal
/// completion of the given grid exists.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(grid: &mut SudokuGrid) -> bool {
        let (column, row) = match grid.first_empty_cell() {
            None => return true,
            Some(cell) => cell
        };

        for number in 1..=GRID_SIZE {
            if check_number(grid, column, row, number) {
                grid.set_cell(column, row, number).unwrap();

                if BacktrackingSolver::solve_rec(grid) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Solves, or attempts to solve, the given grid in place.
    ///
    /// Returns `true` if a full, legal assignment reachable from the given
    /// partial grid exists; the grid then holds that assignment. Returns
    /// `false` otherwise; every tentative digit written on a failing path is
    /// reverted before returning, so the grid is restored to its original
    /// state.
    pub fn solve(&self, grid: &mut SudokuGrid) -> bool {
        BacktrackingSolver::solve_rec(grid)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::validate;

    #[test]
    fn check_number_detects_row_clash() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(2, 4, 7).unwrap();

        assert!(!check_number(&grid, 6, 4, 7));
        assert!(check_number(&grid, 6, 4, 8));
        assert!(check_number(&grid, 6, 5, 7));
    }

    #[test]
    fn check_number_detects_column_clash() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(3, 1, 2).unwrap();

        assert!(!check_number(&grid, 3, 8, 2));
        assert!(check_number(&grid, 4, 8, 2));
    }

    #[test]
    fn check_number_detects_block_clash() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(4, 4, 5).unwrap();

        // (3, 5) shares only the center block with (4, 4).
        assert!(!check_number(&grid, 3, 5, 5));
        assert!(check_number(&grid, 3, 5, 6));
        assert!(check_number(&grid, 0, 5, 5));
    }

    #[test]
    fn check_number_skips_checked_cell() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(0, 0, 9).unwrap();

        assert!(check_number(&grid, 0, 0, 9));
    }

    #[test]
    fn solver_fills_empty_grid() {
        let mut grid = SudokuGrid::new_empty();

        assert!(BacktrackingSolver.solve(&mut grid));
        assert!(grid.is_full());
        assert!(validate::is_valid(&grid));
    }

    #[test]
    fn solver_is_deterministic() {
        let mut first = SudokuGrid::new_empty();
        first.set_cell(0, 0, 4).unwrap();
        let mut second = first.clone();

        assert!(BacktrackingSolver.solve(&mut first));
        assert!(BacktrackingSolver.solve(&mut second));
        assert_eq!(first, second);

        // Solving an already solved grid succeeds without changing it.
        let solved = first.clone();
        assert!(BacktrackingSolver.solve(&mut first));
        assert_eq!(solved, first);
    }

    #[test]
    fn solver_restores_grid_on_failure() {
        let mut grid = SudokuGrid::new_empty();

        // The first row misses only a 9, but the 9 in the last column blocks
        // it, so no completion exists.
        for column in 0..8 {
            grid.set_cell(column, 0, column + 1).unwrap();
        }

        grid.set_cell(8, 5, 9).unwrap();

        let original = grid.clone();
        assert!(!BacktrackingSolver.solve(&mut grid));
        assert_eq!(original, grid);
    }

    #[test]
    fn solver_respects_clues() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(0, 0, 4).unwrap();
        grid.set_cell(8, 8, 2).unwrap();

        assert!(BacktrackingSolver.solve(&mut grid));
        assert_eq!(Some(4), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(8, 8).unwrap());
        assert!(validate::is_valid(&grid));
    }
}
