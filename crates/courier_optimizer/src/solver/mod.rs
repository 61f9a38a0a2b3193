pub mod construction;
pub mod disjunction;
pub mod insertion;
pub mod ls;
pub mod search_context;
pub mod solution;
pub mod solver;
pub mod solver_params;
pub mod time_segment;

use crate::{
    error::OptimizerError,
    problem::{
        time_window::TimeWindow, travel_time_matrix::Seconds,
        vehicle_routing_problem::VehicleRoutingProblemBuilder,
    },
    solution::Solution,
};

use self::{solver::Solver, solver_params::SolverParams};

/// Solves one instance given as raw arrays, node 0 being the depot.
pub fn solve(
    matrix: Vec<Vec<Seconds>>,
    windows: Vec<TimeWindow>,
    service_times: Vec<Seconds>,
    vehicle_count: usize,
    params: SolverParams,
) -> Result<Solution, OptimizerError> {
    let mut builder = VehicleRoutingProblemBuilder::default();
    builder
        .set_travel_times(matrix)
        .set_time_windows(windows)
        .set_service_durations(service_times)
        .set_vehicle_count(vehicle_count);

    let problem = builder.build()?;
    Solver::new(problem, params).solve()
}
