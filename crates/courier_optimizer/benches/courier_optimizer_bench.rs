use std::hint::black_box;

use courier_matrix_providers::synthetic::synthetic_matrices;
use courier_optimizer::{
    problem::{
        time_slot::{DEPOT_TIME_WINDOW, TimeSlot},
        time_window::TimeWindow,
    },
    solve,
    solver::solver_params::{SolverParams, Termination},
};
use criterion::{Criterion, criterion_group, criterion_main};

const NUM_STOPS: usize = 40;

fn instance() -> (Vec<Vec<i64>>, Vec<TimeWindow>, Vec<i64>) {
    let matrix = synthetic_matrices(NUM_STOPS + 1, 300, 2700, 42).into_times();
    let slots = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::AllDay];

    let windows = std::iter::once(DEPOT_TIME_WINDOW)
        .chain((0..NUM_STOPS).map(|i| slots[i % slots.len()].time_window()))
        .collect();
    let services = std::iter::once(0)
        .chain(std::iter::repeat_n(300, NUM_STOPS))
        .collect();

    (matrix, windows, services)
}

fn solve_benchmark(c: &mut Criterion) {
    let (matrix, windows, services) = instance();

    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    group.bench_function("synthetic 40 stops, first local optimum", |b| {
        b.iter(|| {
            solve(
                black_box(matrix.clone()),
                black_box(windows.clone()),
                black_box(services.clone()),
                3,
                SolverParams {
                    terminations: vec![],
                    ..SolverParams::default()
                },
            )
        })
    });

    group.bench_function("synthetic 40 stops, 50 gls iterations", |b| {
        b.iter(|| {
            solve(
                black_box(matrix.clone()),
                black_box(windows.clone()),
                black_box(services.clone()),
                3,
                SolverParams {
                    terminations: vec![Termination::Iterations(50)],
                    ..SolverParams::default()
                },
            )
        })
    });

    group.finish();
}

criterion_group!(benches, solve_benchmark);
criterion_main!(benches);
