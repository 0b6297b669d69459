// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand Sudoku engine that solves
//! classic 9x9 puzzles with two complementary strategies. It supports the
//! following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of grids according to standard rules
//! * Scoring how close a filled grid is to a valid solution
//! * Solving Sudoku using an exhaustive backtracking algorithm
//! * Solving Sudoku using a genetic algorithm built on a reusable
//! evolutionary-search framework
//!
//! # Parsing and printing Sudoku
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_genetic::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!      , , , ,8,1, , , ,\
//!      , ,2, , ,7,8, , ,\
//!      ,5,3, , , ,1,7, ,\
//!     3,7, , , , , , , ,\
//!     6, , , , , , , ,3,\
//!      , , , , , , ,2,4,\
//!      ,6,9, , , ,2,3, ,\
//!      , ,5,9, , ,4, , ,\
//!      , , ,6,5, , , , ").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! A [Sudoku] wraps a grid and offers [Sudoku::is_valid], which applies the
//! standard rules strictly: no digit may repeat within a row, a column, or
//! one of the nine 3x3 blocks. Empty cells are ignored, so partially filled
//! grids can be valid.
//!
//! ```
//! use sudoku_genetic::Sudoku;
//!
//! // Two 1s in the first row.
//! let sudoku = Sudoku::parse("\
//!     1, , , , , , ,1, ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ").unwrap();
//! assert!(!sudoku.is_valid());
//! ```
//!
//! Besides the strict check, [Sudoku::fitness] grades a grid on a continuous
//! scale from 0 to 1, which is what guides the evolutionary solver.
//!
//! # Solving by backtracking
//!
//! [Sudoku::solve_by_backtracking] exhaustively searches for a completion of
//! the grid, filling it in place and reporting success as a boolean. An
//! unsolvable grid is left unchanged.
//!
//! ```
//! use sudoku_genetic::Sudoku;
//!
//! let mut sudoku = Sudoku::parse("\
//!      , , , ,8,1, , , ,\
//!      , ,2, , ,7,8, , ,\
//!      ,5,3, , , ,1,7, ,\
//!     3,7, , , , , , , ,\
//!     6, , , , , , , ,3,\
//!      , , , , , , ,2,4,\
//!      ,6,9, , , ,2,3, ,\
//!      , ,5,9, , ,4, , ,\
//!      , , ,6,5, , , , ").unwrap();
//!
//! assert!(sudoku.solve_by_backtracking());
//! assert!(sudoku.grid().is_full());
//! assert!(sudoku.is_valid());
//! ```
//!
//! # Solving by evolution
//!
//! [Sudoku::solve_by_evolution] seeds a population of candidate fillings and
//! breeds them towards a valid solution. The random number generator is
//! provided by the caller, as is a progress sink that observes the fittest
//! candidate of every generation.
//!
//! ```
//! use sudoku_genetic::Sudoku;
//! use sudoku_genetic::genetic::{EvolutionSettings, SilentSink};
//!
//! // A solved grid with two cells blanked out again.
//! let mut sudoku = Sudoku::parse("\
//!      , ,6,2,8,1,3,5,9,\
//!     9,1,2,5,3,7,8,4,6,\
//!     8,5,3,4,9,6,1,7,2,\
//!     3,7,4,1,2,5,6,9,8,\
//!     6,2,8,7,4,9,5,1,3,\
//!     5,9,1,3,6,8,7,2,4,\
//!     1,6,9,8,7,4,2,3,5,\
//!     2,8,5,9,1,3,4,6,7,\
//!     4,3,7,6,5,2,9,8,1").unwrap();
//!
//! let mut settings = EvolutionSettings::default();
//! settings.max_generations = Some(10_000);
//!
//! let outcome = sudoku
//!     .solve_by_evolution(&settings, &mut rand::thread_rng(), &mut SilentSink)
//!     .unwrap();
//!
//! assert!(outcome.is_converged());
//! assert!(sudoku.is_valid());
//! assert!(sudoku.grid().is_full());
//! ```
//!
//! The same framework also evolves plain strings towards a target, see the
//! [genetic] module for details.
//!
//! # Note regarding performance
//!
//! The evolutionary solver evaluates the fitness of every individual in
//! every generation. It is strongly recommended to use at least
//! `opt-level = 2`, even in tests that run evolution.

pub mod error;
pub mod fitness;
pub mod genetic;
pub mod genome;
pub mod solver;
pub mod util;
pub mod validate;

#[cfg(test)]
mod random_tests;

use crate::error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use crate::fitness::FitnessBreakdown;
use crate::genetic::{
    CancelToken,
    EvolutionOutcome,
    EvolutionResult,
    EvolutionSettings,
    Population,
    ProgressSink
};
use crate::genome::{PuzzleContext, SudokuGenome};
use crate::solver::BacktrackingSolver;

use rand::Rng;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeserializeError;

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// The number of cells along one axis of the grid (and the highest digit).
pub const GRID_SIZE: usize = 9;

/// The number of cells along one axis of a 3x3 block.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in a grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The default marker for empty cells in caller-provided row arrays (see
/// [SudokuGrid::from_rows]).
pub const EMPTY_CELL: usize = 0;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * GRID_SIZE + column
}

/// A Sudoku grid is a square of 9x9 cells that is organized into nine
/// non-overlapping 3x3 blocks. Each cell may or may not be occupied by a
/// digit from 1 to 9.
///
/// Blocks are indexed 0 to 8 in reading order, so block `i` has its top-left
/// cell at column `3 * (i % 3)` and row `3 * (i / 3)`.
///
/// `SudokuGrid` implements `Display` and prints with digits and box-drawing
/// characters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
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

    for x in 0..GRID_SIZE {
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

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(x, y)]), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for y in 0..GRID_SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
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

impl SudokuGrid {

    /// Creates a new, completely empty grid.
    pub fn new_empty() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Creates a grid from a 9x9 array of rows, where [EMPTY_CELL] (i.e. 0)
    /// marks an empty cell and all other entries must be digits from 1 to 9.
    /// The input is copied; the grid never aliases caller-owned storage.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidNumber` if any entry is neither the empty marker
    /// nor a digit from 1 to 9.
    pub fn from_rows(rows: &[[usize; GRID_SIZE]; GRID_SIZE])
            -> SudokuResult<SudokuGrid> {
        SudokuGrid::from_rows_with_empty(rows, EMPTY_CELL)
    }

    /// Creates a grid from a 9x9 array of rows using a caller-defined empty
    /// marker. Entries equal to `empty_marker` become empty cells, even if
    /// the marker itself lies in the range 1 to 9; all other entries must be
    /// digits from 1 to 9.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidNumber` if any entry is neither the empty marker
    /// nor a digit from 1 to 9.
    pub fn from_rows_with_empty(rows: &[[usize; GRID_SIZE]; GRID_SIZE],
            empty_marker: usize) -> SudokuResult<SudokuGrid> {
        let mut cells = Vec::with_capacity(CELL_COUNT);

        for row in rows {
            for &value in row {
                if value == empty_marker {
                    cells.push(None);
                }
                else if value >= 1 && value <= GRID_SIZE {
                    cells.push(Some(value));
                }
                else {
                    return Err(SudokuError::InvalidNumber);
                }
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Creates a grid from a flat slice of 81 values in row-major order,
    /// where [EMPTY_CELL] (i.e. 0) marks an empty cell and all other values
    /// must be digits from 1 to 9. The input is copied.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` if the slice does not hold exactly
    /// 81 values.
    /// * `SudokuError::InvalidNumber` if any value is neither the empty
    /// marker nor a digit from 1 to 9.
    pub fn from_cells(values: &[usize]) -> SudokuResult<SudokuGrid> {
        if values.len() != CELL_COUNT {
            return Err(SudokuError::InvalidDimensions);
        }

        let mut cells = Vec::with_capacity(CELL_COUNT);

        for &value in values {
            if value == EMPTY_CELL {
                cells.push(None);
            }
            else if value >= 1 && value <= GRID_SIZE {
                cells.push(Some(value));
            }
            else {
                return Err(SudokuError::InvalidNumber);
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// exactly 81 entries, which are either empty or a digit from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    /// `1, ,2, ,...` (with 81 entries in total) assigns 1 to the top-left
    /// cell, leaves the second cell of the top row empty, and so on.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new_empty();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > GRID_SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_genetic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new_empty();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
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
        if column >= GRID_SIZE || row >= GRID_SIZE {
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
    /// number. If the cell was not empty, the old number will be overwritten.
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
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > GRID_SIZE {
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
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Converts the grid back into a 9x9 array of rows, where empty cells
    /// are represented by [EMPTY_CELL].
    pub fn to_rows(&self) -> [[usize; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[EMPTY_CELL; GRID_SIZE]; GRID_SIZE];

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if let Some(number) = self.cells[index(column, row)] {
                    rows[row][column] = number;
                }
            }
        }

        rows
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// An iterator over the contents of the cells in the given row, in
    /// ascending column order.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) to iterate over. Must be in the range
    /// `[0, 9[`.
    pub fn row_cells(&self, row: usize)
            -> impl Iterator<Item = Option<usize>> + '_ {
        (0..GRID_SIZE).map(move |column| self.cells[index(column, row)])
    }

    /// An iterator over the contents of the cells in the given column, in
    /// ascending row order.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) to iterate over. Must be in the
    /// range `[0, 9[`.
    pub fn column_cells(&self, column: usize)
            -> impl Iterator<Item = Option<usize>> + '_ {
        (0..GRID_SIZE).map(move |row| self.cells[index(column, row)])
    }

    /// An iterator over the contents of the cells in the given block, in
    /// reading order.
    ///
    /// # Arguments
    ///
    /// * `block`: The block index. Must be in the range `[0, 9[`, where block
    /// 0 is in the top-left corner and indices proceed in reading order.
    pub fn block_cells(&self, block: usize)
            -> impl Iterator<Item = Option<usize>> + '_ {
        let start_column = BLOCK_SIZE * (block % BLOCK_SIZE);
        let start_row = BLOCK_SIZE * (block / BLOCK_SIZE);

        (0..GRID_SIZE).map(move |i| {
            let column = start_column + i % BLOCK_SIZE;
            let row = start_row + i / BLOCK_SIZE;
            self.cells[index(column, row)]
        })
    }

    /// The coordinates of all empty cells as `(column, row)` pairs, in
    /// row-major order (all cells of the first row before any cell of the
    /// second one). This sequence defines the gene positions for the
    /// evolutionary solver.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut coordinates = Vec::new();

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if self.cells[index(column, row)].is_none() {
                    coordinates.push((column, row));
                }
            }
        }

        coordinates
    }

    /// The coordinates of the first empty cell in row-major order as a
    /// `(column, row)` pair, or `None` if the grid is full.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if self.cells[index(column, row)].is_none() {
                    return Some((column, row));
                }
            }
        }

        None
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl Serialize for SudokuGrid {
    fn serialize<S: Serializer>(&self, serializer: S)
            -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_parseable_string().as_str())
    }
}

impl<'de> Deserialize<'de> for SudokuGrid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D)
            -> Result<SudokuGrid, D::Error> {
        let code = String::deserialize(deserializer)?;
        SudokuGrid::parse(code.as_str())
            .map_err(|e| DeserializeError::custom(format!("{:?}", e)))
    }
}

/// A Sudoku wraps a [SudokuGrid] and offers the solving strategies and
/// validity queries on it. The wrapped grid may be in any state, including an
/// invalid one; validity is a query, not an invariant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sudoku {
    grid: SudokuGrid
}

impl Sudoku {

    /// Creates a new Sudoku operating on the given grid.
    pub fn new(grid: SudokuGrid) -> Sudoku {
        Sudoku {
            grid
        }
    }

    /// Creates a Sudoku from a 9x9 array of rows, where [EMPTY_CELL] (i.e.
    /// 0) marks an empty cell. See [SudokuGrid::from_rows].
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidNumber` if any entry is neither the empty marker
    /// nor a digit from 1 to 9.
    pub fn from_rows(rows: &[[usize; GRID_SIZE]; GRID_SIZE])
            -> SudokuResult<Sudoku> {
        Ok(Sudoku::new(SudokuGrid::from_rows(rows)?))
    }

    /// Parses the code into a [SudokuGrid] using [SudokuGrid::parse] and
    /// wraps the result in a Sudoku.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [SudokuGrid::parse] for further information.
    pub fn parse(code: &str) -> SudokuParseResult<Sudoku> {
        Ok(Sudoku::new(SudokuGrid::parse(code)?))
    }

    /// Gets a reference to the [SudokuGrid] of this Sudoku.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the [SudokuGrid] of this Sudoku.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Indicates whether the grid satisfies the standard rules: no repeated
    /// digit in any row, column, or block. Empty cells are ignored. See the
    /// [validate] module for per-axis queries.
    pub fn is_valid(&self) -> bool {
        validate::is_valid(&self.grid)
    }

    /// Computes the continuous fitness of the grid, broken down by axis. A
    /// total of 1.0 means the grid is full and valid. See the [fitness]
    /// module for details on the scoring.
    pub fn fitness(&self) -> FitnessBreakdown {
        fitness::breakdown(&self.grid)
    }

    /// Solves this Sudoku with an exhaustive backtracking search, filling
    /// the grid in place. Candidate digits are tried in ascending order, so
    /// the result is deterministic for a given input.
    ///
    /// Returns `true` if a solution was found, in which case the grid holds
    /// that solution afterwards. Returns `false` if no legal completion
    /// exists, in which case the grid is left in its original state.
    pub fn solve_by_backtracking(&mut self) -> bool {
        BacktrackingSolver.solve(&mut self.grid)
    }

    /// Solves this Sudoku with a genetic algorithm. A population of random
    /// fillings of the empty cells is seeded and bred until a filling
    /// satisfies all rules or a termination condition from `settings` is
    /// reached.
    ///
    /// On [EvolutionOutcome::Converged], the winning filling is written into
    /// the grid. All other outcomes leave the grid untouched and carry the
    /// fittest genome found, so the caller decides what to do with a run
    /// that did not converge.
    ///
    /// # Arguments
    ///
    /// * `settings`: Population size, elitism factor, and optional
    /// generation bound. See [EvolutionSettings].
    /// * `rng`: The random number generator used for seeding and breeding.
    /// * `sink`: Receives the fittest genome of every generation. Use
    /// [SilentSink](genetic::SilentSink) to ignore progress.
    ///
    /// # Errors
    ///
    /// * `EvolutionError::MissingTarget` if the grid has no empty cells,
    /// leaving evolution nothing to operate on.
    /// * Any error raised by [EvolutionSettings::validate].
    pub fn solve_by_evolution<R, S>(&mut self, settings: &EvolutionSettings,
            rng: &mut R, sink: &mut S)
            -> EvolutionResult<EvolutionOutcome<SudokuGenome>>
    where
        R: Rng,
        S: ProgressSink<SudokuGenome>
    {
        self.solve_by_evolution_with_cancel(settings, rng, sink,
            &CancelToken::new())
    }

    /// Same as [Sudoku::solve_by_evolution], but additionally polls the
    /// given [CancelToken] once per generation, allowing another part of the
    /// program to stop a long-running search.
    pub fn solve_by_evolution_with_cancel<R, S>(&mut self,
            settings: &EvolutionSettings, rng: &mut R, sink: &mut S,
            cancel: &CancelToken)
            -> EvolutionResult<EvolutionOutcome<SudokuGenome>>
    where
        R: Rng,
        S: ProgressSink<SudokuGenome>
    {
        settings.validate()?;

        let context = Rc::new(PuzzleContext::new(self.grid.clone())?);
        let population: Population<SudokuGenome> =
            genome::seed_population(context, settings.population_size, rng);
        let outcome =
            population.evolve_with_cancel(settings, rng, sink, cancel)?;

        if let EvolutionOutcome::Converged { fittest, .. } = &outcome {
            self.grid = fittest.grid();
        }

        Ok(outcome)
    }
}
