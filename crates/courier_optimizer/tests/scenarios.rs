use courier_optimizer::{
    InstanceError, OptimizerError,
    problem::{node::NodeIdx, time_window::TimeWindow},
    solve,
    solver::solver_params::{SolverParams, Termination},
};
use jiff::SignedDuration;

const DAY: TimeWindow = TimeWindow::new(0, 82_800);

fn params() -> SolverParams {
    SolverParams {
        terminations: vec![
            Termination::Iterations(30),
            Termination::Duration(SignedDuration::from_secs(3)),
        ],
        ..SolverParams::default()
    }
}

fn constant_matrix(n: usize, secs: i64) -> Vec<Vec<i64>> {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0 } else { secs }).collect())
        .collect()
}

#[test]
fn test_three_stops_single_vehicle() {
    let solution = solve(
        constant_matrix(4, 600),
        vec![DAY; 4],
        vec![0, 300, 300, 300],
        1,
        params(),
    )
    .unwrap();

    assert!(solution.unserved.is_empty());
    assert_eq!(solution.routes.len(), 1);

    let route = &solution.routes[0];
    assert_eq!(route.stops().len(), 3);
    assert_eq!(route.elapsed(), 4 * 600 + 3 * 300);
    assert_eq!(solution.cost, 4 * 600 + 3 * 300);
}

#[test]
fn test_unreachable_stop_is_unserved() {
    let solution = solve(
        vec![vec![0, 1000], vec![1000, 0]],
        vec![DAY, TimeWindow::new(0, 100)],
        vec![0, 300],
        1,
        params(),
    )
    .unwrap();

    assert_eq!(solution.unserved, vec![NodeIdx::new(1)]);
    assert!(solution.routes.iter().all(|route| route.is_empty()));
}

#[test]
fn test_non_square_matrix_is_rejected() {
    let result = solve(
        vec![vec![0, 1, 2], vec![1, 0, 2]],
        vec![DAY; 2],
        vec![0, 0],
        1,
        params(),
    );

    assert!(matches!(
        result,
        Err(OptimizerError::InvalidInstance(
            InstanceError::NonSquareMatrix { .. }
        ))
    ));
}

#[test]
fn test_inverted_window_is_rejected() {
    let result = solve(
        constant_matrix(2, 60),
        vec![DAY, TimeWindow::new(500, 100)],
        vec![0, 0],
        1,
        params(),
    );

    assert!(matches!(
        result,
        Err(OptimizerError::InvalidInstance(
            InstanceError::InvertedTimeWindow { .. }
        ))
    ));
}

#[test]
fn test_zero_vehicles_is_rejected() {
    let result = solve(constant_matrix(2, 60), vec![DAY; 2], vec![0, 0], 0, params());

    assert!(matches!(
        result,
        Err(OptimizerError::InvalidInstance(InstanceError::NoVehicles))
    ));
}

#[test]
fn test_tight_windows_need_two_vehicles() {
    // Both stops open for one minute at the same time, far from each other.
    let matrix = vec![
        vec![0, 1800, 1800],
        vec![1800, 0, 3600],
        vec![1800, 3600, 0],
    ];
    let windows = vec![DAY, TimeWindow::new(7200, 7260), TimeWindow::new(7200, 7260)];

    let single = solve(matrix.clone(), windows.clone(), vec![0, 300, 300], 1, params()).unwrap();
    assert_eq!(single.unserved.len(), 1);

    let double = solve(matrix, windows, vec![0, 300, 300], 2, params()).unwrap();
    assert!(double.unserved.is_empty());
    assert_eq!(
        double.routes.iter().filter(|route| !route.is_empty()).count(),
        2
    );
}
