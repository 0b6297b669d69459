//! This module contains the continuous fitness scoring which guides the
//! evolutionary solver.
//!
//! In contrast to the strict checks in the [validate](../validate/index.html)
//! module, fitness is a soft measure: a grid that breaks the rules still gets
//! a score expressing how close it is to a valid solution. Each of the three
//! axes (rows, columns, blocks) is scored by counting the distinct digits in
//! each of its nine groups, so duplicates are counted once. A group
//! contributes at most 9, an axis at most 81, and normalization divides by
//! 81, which puts every axis score in `[0, 1]`. The total score is the mean
//! of the three axis scores and reaches 1.0 exactly for a full, valid grid.

use crate::{CELL_COUNT, GRID_SIZE, SudokuGrid};
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

fn group_score(cells: impl Iterator<Item = Option<usize>>) -> usize {
    let mut seen = DigitSet::new();
    let mut score = 0;

    for digit in cells.flatten() {
        if seen.insert(digit) {
            score += 1;
        }
    }

    score
}

/// Computes the raw row score of the given grid: the sum over all rows of
/// the number of distinct digits in that row. The result is in `[0, 81]`.
pub fn raw_row_score(grid: &SudokuGrid) -> usize {
    (0..GRID_SIZE).map(|row| group_score(grid.row_cells(row))).sum()
}

/// Computes the raw column score of the given grid: the sum over all columns
/// of the number of distinct digits in that column. The result is in
/// `[0, 81]`.
pub fn raw_column_score(grid: &SudokuGrid) -> usize {
    (0..GRID_SIZE).map(|column| group_score(grid.column_cells(column))).sum()
}

/// Computes the raw block score of the given grid: the sum over all blocks
/// of the number of distinct digits in that block. The result is in
/// `[0, 81]`.
pub fn raw_block_score(grid: &SudokuGrid) -> usize {
    (0..GRID_SIZE).map(|block| group_score(grid.block_cells(block))).sum()
}

/// The normalized row score of the given grid, in `[0, 1]`.
pub fn score_rows(grid: &SudokuGrid) -> f64 {
    raw_row_score(grid) as f64 / CELL_COUNT as f64
}

/// The normalized column score of the given grid, in `[0, 1]`.
pub fn score_columns(grid: &SudokuGrid) -> f64 {
    raw_column_score(grid) as f64 / CELL_COUNT as f64
}

/// The normalized block score of the given grid, in `[0, 1]`.
pub fn score_blocks(grid: &SudokuGrid) -> f64 {
    raw_block_score(grid) as f64 / CELL_COUNT as f64
}

/// The total score of the given grid: the mean of the three normalized axis
/// scores. A full, valid grid scores exactly 1.0; every other grid scores
/// less.
pub fn score_total(grid: &SudokuGrid) -> f64 {
    (score_rows(grid) + score_columns(grid) + score_blocks(grid)) / 3.0
}

/// The fitness of a grid broken down by axis, as reported to progress sinks
/// during evolution.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct FitnessBreakdown {

    /// The mean of the three axis scores, in `[0, 1]`.
    pub total: f64,

    /// The normalized row score, in `[0, 1]`.
    pub rows: f64,

    /// The normalized column score, in `[0, 1]`.
    pub columns: f64,

    /// The normalized block score, in `[0, 1]`.
    pub blocks: f64
}

/// Computes all axis scores and the total of the given grid in one go.
pub fn breakdown(grid: &SudokuGrid) -> FitnessBreakdown {
    let rows = score_rows(grid);
    let columns = score_columns(grid);
    let blocks = score_blocks(grid);

    FitnessBreakdown {
        total: (rows + columns + blocks) / 3.0,
        rows,
        columns,
        blocks
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::fix_tests::CLASSIC_SOLUTION;

    #[test]
    fn empty_grid_scores_zero() {
        let grid = SudokuGrid::new_empty();

        assert_eq!(0, raw_row_score(&grid));
        assert_eq!(0, raw_column_score(&grid));
        assert_eq!(0, raw_block_score(&grid));
        assert_eq!(0.0, score_total(&grid));
    }

    #[test]
    fn solved_grid_scores_one() {
        let grid = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();

        assert_eq!(CELL_COUNT, raw_row_score(&grid));
        assert_eq!(CELL_COUNT, raw_column_score(&grid));
        assert_eq!(CELL_COUNT, raw_block_score(&grid));

        let breakdown = breakdown(&grid);
        assert_eq!(1.0, breakdown.total);
        assert_eq!(1.0, breakdown.rows);
        assert_eq!(1.0, breakdown.columns);
        assert_eq!(1.0, breakdown.blocks);
    }

    #[test]
    fn duplicates_counted_once() {
        let mut grid = SudokuGrid::new_empty();

        // Three 5s in the first row, which also spread over two blocks.
        grid.set_cell(0, 0, 5).unwrap();
        grid.set_cell(1, 0, 5).unwrap();
        grid.set_cell(3, 0, 5).unwrap();

        assert_eq!(1, raw_row_score(&grid));
        assert_eq!(3, raw_column_score(&grid));
        assert_eq!(2, raw_block_score(&grid));
    }

    #[test]
    fn single_cell_contributes_to_every_axis() {
        let mut grid = SudokuGrid::new_empty();
        grid.set_cell(4, 4, 7).unwrap();

        let breakdown = breakdown(&grid);
        let expected = 1.0 / CELL_COUNT as f64;

        assert_eq!(expected, breakdown.rows);
        assert_eq!(expected, breakdown.columns);
        assert_eq!(expected, breakdown.blocks);
        assert_eq!(expected, breakdown.total);
    }

    #[test]
    fn total_is_mean_of_axes() {
        let mut grid = SudokuGrid::new_empty();

        for column in 0..GRID_SIZE {
            grid.set_cell(column, 0, column + 1).unwrap();
        }

        // A duplicate below the top-left 1 hurts its column and block, but
        // adds a fresh distinct digit to the second row.
        grid.set_cell(0, 1, 1).unwrap();

        let breakdown = breakdown(&grid);
        let expected_total =
            (breakdown.rows + breakdown.columns + breakdown.blocks) / 3.0;

        assert_eq!(expected_total, breakdown.total);
        assert_eq!(10.0 / 81.0, breakdown.rows);
        assert_eq!(9.0 / 81.0, breakdown.columns);
        assert_eq!(9.0 / 81.0, breakdown.blocks);
    }
}
