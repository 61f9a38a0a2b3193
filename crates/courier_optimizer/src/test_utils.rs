use crate::problem::{
    time_window::TimeWindow,
    travel_time_matrix::Seconds,
    vehicle_routing_problem::{VehicleRoutingProblem, VehicleRoutingProblemBuilder},
};

pub const FULL_DAY: TimeWindow = TimeWindow::new(0, 82_800);

pub struct TestProblem {
    pub num_nodes: usize,
    pub travel_time: Seconds,
    pub service_duration: Seconds,
    pub vehicle_count: usize,
    pub time_window: TimeWindow,
}

impl Default for TestProblem {
    fn default() -> Self {
        TestProblem {
            num_nodes: 4,
            travel_time: 600,
            service_duration: 300,
            vehicle_count: 1,
            time_window: FULL_DAY,
        }
    }
}

/// Constant travel times between distinct nodes, the same window everywhere and no service
/// at the depot.
pub fn create_problem(params: TestProblem) -> VehicleRoutingProblem {
    let n = params.num_nodes;
    let travel_times = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 0 } else { params.travel_time })
                .collect()
        })
        .collect();

    let mut service_durations = vec![params.service_duration; n];
    service_durations[0] = 0;

    let mut builder = VehicleRoutingProblemBuilder::default();
    builder
        .set_travel_times(travel_times)
        .set_time_windows(vec![params.time_window; n])
        .set_service_durations(service_durations)
        .set_vehicle_count(params.vehicle_count);

    builder.build().unwrap()
}

pub fn create_problem_with_windows(
    travel_times: Vec<Vec<Seconds>>,
    time_windows: Vec<TimeWindow>,
    service_durations: Vec<Seconds>,
) -> VehicleRoutingProblem {
    create_problem_with_vehicles(travel_times, time_windows, service_durations, 1)
}

pub fn create_problem_with_vehicles(
    travel_times: Vec<Vec<Seconds>>,
    time_windows: Vec<TimeWindow>,
    service_durations: Vec<Seconds>,
    vehicle_count: usize,
) -> VehicleRoutingProblem {
    let mut builder = VehicleRoutingProblemBuilder::default();
    builder
        .set_travel_times(travel_times)
        .set_time_windows(time_windows)
        .set_service_durations(service_durations)
        .set_vehicle_count(vehicle_count);

    builder.build().unwrap()
}

/// Travel time is the distance between positions on a line, a handy way to get a unique
/// optimal tour.
pub fn line_matrix(positions: &[Seconds]) -> Vec<Vec<Seconds>> {
    positions
        .iter()
        .map(|a| positions.iter().map(|b| (a - b).abs()).collect())
        .collect()
}
