use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use sudoku_classic::Board;
use sudoku_classic::solver::{self, Solution};

use serde::Deserialize;

use std::fs;
use std::time::Duration;

// Explanation of benchmark classes:
//
// propagation: Puzzles that single-candidate propagation completes on its
//              own, without any backtracking.
// backtracking: Puzzles on which propagation stalls, so the search has to
//               branch on the most-constrained cell.

const MEASUREMENT_TIME_SECS: u64 = 30;
const SAMPLE_SIZE: usize = 100;

const BENCHDATA_DIR: &str = "benchdata/";
const TASK_FILE_EXT: &str = ".json";

#[derive(Deserialize)]
struct Task {
    puzzle: Board,
    solution: Board
}

#[derive(Deserialize)]
struct Tasks {
    tasks: Vec<Task>
}

fn solve_task(task: &Task) {
    let computed_solution = solver::solve_board(task.puzzle.clone());
    assert_eq!(Solution::Solved(task.solution.clone()), computed_solution);
}

fn solve_tasks(tasks: &[Task]) {
    for task in tasks {
        solve_task(task);
    }
}

fn benchmark_tasks(group: &mut BenchmarkGroup<WallTime>, id: &str) {
    let mut file = String::from(BENCHDATA_DIR);
    file.push_str(id);
    file.push_str(TASK_FILE_EXT);
    let json = fs::read_to_string(file).unwrap();
    let tasks: Tasks = serde_json::from_str(&json).unwrap();

    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.bench_function(id, |b| b.iter(|| solve_tasks(&tasks.tasks)));
}

fn benchmark_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");

    benchmark_tasks(&mut group, "propagation");
    benchmark_tasks(&mut group, "backtracking");
}

criterion_group!(all, benchmark_solver);

criterion_main!(all);
