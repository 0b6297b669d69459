use crate::{GRID_SIZE, Sudoku, SudokuGrid};
use crate::fitness;
use crate::genetic::{EvolutionSettings, Genome, SilentSink};
use crate::genome::{PuzzleContext, SudokuGenome};
use crate::solver::BacktrackingSolver;
use crate::validate;

use rand::Rng;
use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use std::rc::Rc;

const ITERATIONS_PER_RUN: usize = 10;

fn shuffled_digits(rng: &mut impl Rng) -> Vec<usize> {
    let mut digits: Vec<usize> = (1..=GRID_SIZE).collect();
    let len = digits.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        digits.swap(i, j);
    }

    digits
}

/// Produces a random full, valid grid by seeding the first row with a random
/// permutation and completing it deterministically.
fn random_solved_grid(rng: &mut impl Rng) -> SudokuGrid {
    let mut grid = SudokuGrid::new_empty();

    for (column, digit) in shuffled_digits(rng).into_iter().enumerate() {
        grid.set_cell(column, 0, digit).unwrap();
    }

    assert!(BacktrackingSolver.solve(&mut grid));
    grid
}

fn clear_random_cells(grid: &mut SudokuGrid, count: usize,
        rng: &mut impl Rng) {
    let mut cleared = 0;

    while cleared < count {
        let column = rng.gen_range(0..GRID_SIZE);
        let row = rng.gen_range(0..GRID_SIZE);

        if grid.get_cell(column, row).unwrap().is_some() {
            grid.clear_cell(column, row).unwrap();
            cleared += 1;
        }
    }
}

#[test]
fn random_solved_grids_are_valid_and_perfectly_fit() {
    let mut rng = ChaCha8Rng::seed_from_u64(30);

    for _ in 0..ITERATIONS_PER_RUN {
        let grid = random_solved_grid(&mut rng);

        assert!(grid.is_full());
        assert!(validate::is_valid(&grid));
        assert_eq!(1.0, fitness::score_total(&grid));
    }
}

#[test]
fn solver_completes_randomly_reduced_grids() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    for _ in 0..ITERATIONS_PER_RUN {
        let solved = random_solved_grid(&mut rng);
        let mut reduced = solved.clone();
        clear_random_cells(&mut reduced, 30, &mut rng);

        let clues = reduced.clone();
        assert!(BacktrackingSolver.solve(&mut reduced));
        assert!(reduced.is_full());
        assert!(validate::is_valid(&reduced));

        // Every clue survives into the completion.
        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if let Some(number) = clues.get_cell(column, row).unwrap() {
                    assert_eq!(Some(number),
                        reduced.get_cell(column, row).unwrap());
                }
            }
        }
    }
}

#[test]
fn reproduction_preserves_gene_count_on_random_pairs() {
    let mut rng = ChaCha8Rng::seed_from_u64(32);

    for _ in 0..ITERATIONS_PER_RUN {
        let mut grid = random_solved_grid(&mut rng);
        let holes = rng.gen_range(1..=20);
        clear_random_cells(&mut grid, holes, &mut rng);

        let context = Rc::new(PuzzleContext::new(grid).unwrap());
        let first = SudokuGenome::random(Rc::clone(&context), &mut rng);
        let second = SudokuGenome::random(Rc::clone(&context), &mut rng);
        let child = first.reproduce(&second, &mut rng);

        assert_eq!(holes, child.genes().len());
        assert!(child.grid().is_full());
    }
}

#[test]
fn random_genome_fitness_is_within_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(33);
    let mut grid = random_solved_grid(&mut rng);
    clear_random_cells(&mut grid, 40, &mut rng);
    let context = Rc::new(PuzzleContext::new(grid).unwrap());

    for _ in 0..50 {
        let genome = SudokuGenome::random(Rc::clone(&context), &mut rng);
        let fitness = genome.fitness();

        assert!(fitness >= 0.0);
        assert!(fitness <= 1.0);
    }
}

#[test]
fn evolution_recovers_random_cleared_cells() {
    let mut rng = ChaCha8Rng::seed_from_u64(34);

    for _ in 0..3 {
        let mut grid = random_solved_grid(&mut rng);
        clear_random_cells(&mut grid, 3, &mut rng);

        let mut sudoku = Sudoku::new(grid);
        let mut settings = EvolutionSettings::new(150);
        settings.max_generations = Some(50_000);

        let outcome = sudoku
            .solve_by_evolution(&settings, &mut rng, &mut SilentSink)
            .unwrap();

        assert!(outcome.is_converged());
        assert!(sudoku.grid().is_full());
        assert!(sudoku.is_valid());
    }
}
