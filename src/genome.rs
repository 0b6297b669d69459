//! This module specializes the evolutionary-search framework from the
//! [genetic](../genetic/index.html) module to Sudoku.
//!
//! The clues of the puzzle are identical for every candidate solution, so
//! they are stored once in a shared, read-only [PuzzleContext]. A
//! [SudokuGenome] owns only the digits assigned to the puzzle's empty cells;
//! its gene positions are defined by the context's empty-cell index. For
//! fitness scoring, a genome materializes a full grid from the context and
//! its genes.

use crate::{GRID_SIZE, SudokuGrid};
use crate::fitness::{self, FitnessBreakdown};
use crate::genetic::{
    EvolutionError,
    EvolutionResult,
    Genome,
    GeneSource,
    Population,
    gene_source
};

use rand::Rng;

use std::rc::Rc;

/// The fixed portion of a puzzle, shared by a whole population: the base
/// grid with its clues and the coordinates of its empty cells. The empty
/// cells define the gene positions of every [SudokuGenome] that refers to
/// this context.
#[derive(Clone, Debug)]
pub struct PuzzleContext {
    base: SudokuGrid,
    empty_cells: Vec<(usize, usize)>
}

impl PuzzleContext {

    /// Creates the context for the given base grid, computing the empty-cell
    /// index once.
    ///
    /// # Errors
    ///
    /// `EvolutionError::MissingTarget` if the grid has no empty cells, since
    /// a genome without gene positions cannot be evolved.
    pub fn new(base: SudokuGrid) -> EvolutionResult<PuzzleContext> {
        let empty_cells = base.empty_cells();

        if empty_cells.is_empty() {
            return Err(EvolutionError::MissingTarget);
        }

        Ok(PuzzleContext {
            base,
            empty_cells
        })
    }

    /// Gets a reference to the base grid holding the clues.
    pub fn base(&self) -> &SudokuGrid {
        &self.base
    }

    /// The coordinates of the empty cells of the base grid as
    /// `(column, row)` pairs, in row-major order. Gene `i` of every genome
    /// with this context is the digit assigned to `empty_cells()[i]`.
    pub fn empty_cells(&self) -> &[(usize, usize)] {
        &self.empty_cells
    }
}

/// A [Genome] representing one candidate filling of a puzzle's empty cells.
/// The clues are shared through an [Rc]-counted [PuzzleContext]; cloning a
/// genome copies only its genes.
#[derive(Clone, Debug)]
pub struct SudokuGenome {
    context: Rc<PuzzleContext>,
    genes: Vec<usize>
}

impl SudokuGenome {

    /// Creates a genome whose empty cells are filled with uniformly random
    /// digits from 1 to 9.
    pub fn random<R: Rng>(context: Rc<PuzzleContext>, rng: &mut R)
            -> SudokuGenome {
        let genes = (0..context.empty_cells.len())
            .map(|_| rng.gen_range(1..=GRID_SIZE))
            .collect();

        SudokuGenome {
            context,
            genes
        }
    }

    /// Creates a genome with the given gene digits, which must contain one
    /// digit from 1 to 9 per empty cell of the context.
    pub fn with_genes(context: Rc<PuzzleContext>, genes: Vec<usize>)
            -> SudokuGenome {
        debug_assert_eq!(context.empty_cells.len(), genes.len());
        debug_assert!(genes.iter().all(|&g| g >= 1 && g <= GRID_SIZE));

        SudokuGenome {
            context,
            genes
        }
    }

    /// The digits this genome assigns to the context's empty cells, in the
    /// order of the empty-cell index.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Materializes the full grid described by this genome: the context's
    /// clues plus this genome's digits in the empty cells. The result is
    /// always a full grid.
    pub fn grid(&self) -> SudokuGrid {
        let mut grid = self.context.base.clone();

        for (&(column, row), &digit) in
                self.context.empty_cells.iter().zip(self.genes.iter()) {
            grid.set_cell(column, row, digit).unwrap();
        }

        grid
    }

    /// Computes the fitness of the materialized grid broken down by axis,
    /// for progress reporting.
    pub fn fitness_breakdown(&self) -> FitnessBreakdown {
        fitness::breakdown(&self.grid())
    }
}

impl Genome for SudokuGenome {
    fn fitness(&self) -> f64 {
        fitness::score_total(&self.grid())
    }

    fn reproduce<R: Rng>(&self, mate: &Self, rng: &mut R) -> SudokuGenome {
        debug_assert_eq!(self.genes.len(), mate.genes.len());

        let genes = self.genes.iter()
            .zip(mate.genes.iter())
            .map(|(&self_gene, &mate_gene)| match gene_source(rng) {
                GeneSource::FromSelf => self_gene,
                GeneSource::FromMate => mate_gene,
                GeneSource::Mutation => rng.gen_range(1..=GRID_SIZE)
            })
            .collect();

        SudokuGenome {
            context: Rc::clone(&self.context),
            genes
        }
    }
}

/// Seeds a population of the given size for the given context, where every
/// individual's empty cells are filled with uniformly random digits.
pub fn seed_population<R: Rng>(context: Rc<PuzzleContext>, size: usize,
        rng: &mut R) -> Population<SudokuGenome> {
    let individuals = (0..size)
        .map(|_| SudokuGenome::random(Rc::clone(&context), rng))
        .collect();

    Population::new(individuals)
}
