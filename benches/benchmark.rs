use criterion::{criterion_group, criterion_main, Criterion};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use serde::Deserialize;

use sudoku_genetic::{Sudoku, SudokuGrid};
use sudoku_genetic::genetic::{EvolutionSettings, SilentSink};
use sudoku_genetic::solver::BacktrackingSolver;

use std::fs;

// Explanation of benchmark classes:
//
// backtracking: the exhaustive solver, once per puzzle in the benchdata
//               file. Puzzles with fewer clues take longer.
// evolution: a fixed number of generations on a nearly solved grid, to
//            measure the per-generation cost independently of convergence
//            luck.

const BENCHDATA_FILE: &str = "benchdata/puzzles.json";

#[derive(Deserialize)]
struct Task {
    name: String,
    puzzle: SudokuGrid
}

fn load_tasks() -> Vec<Task> {
    let json = fs::read_to_string(BENCHDATA_FILE).unwrap();
    serde_json::from_str(json.as_str()).unwrap()
}

fn benchmark_backtracking(c: &mut Criterion) {
    let tasks = load_tasks();
    let mut group = c.benchmark_group("backtracking");
    group.sample_size(20);

    for task in &tasks {
        group.bench_function(task.name.as_str(), |b| b.iter(|| {
            let mut grid = task.puzzle.clone();
            BacktrackingSolver.solve(&mut grid)
        }));
    }

    group.finish();
}

fn benchmark_evolution(c: &mut Criterion) {
    let tasks = load_tasks();
    let task = tasks.iter()
        .find(|task| task.name == "nearly-solved")
        .unwrap();

    let mut group = c.benchmark_group("evolution");
    group.sample_size(10);

    group.bench_function("25 generations", |b| b.iter(|| {
        let mut sudoku = Sudoku::new(task.puzzle.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut settings = EvolutionSettings::new(100);
        settings.max_generations = Some(25);

        sudoku.solve_by_evolution(&settings, &mut rng, &mut SilentSink)
            .unwrap()
    }));

    group.finish();
}

criterion_group!(benches, benchmark_backtracking, benchmark_evolution);
criterion_main!(benches);
