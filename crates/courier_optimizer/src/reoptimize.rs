use courier_matrix_providers::{
    cache::MatricesCache, travel_matrix_client::TravelMatrixClient,
    travel_matrix_provider::TravelMatrixProvider,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    error::{InstanceError, OptimizerError},
    problem::{
        time_dimension::TimeDimension,
        time_slot::{DEFAULT_SERVICE_DURATION, DEPOT_TIME_WINDOW, REENTRY_TIME_WINDOW},
        time_window::TimeWindow,
        travel_time_matrix::Seconds,
        vehicle_routing_problem::{VehicleRoutingProblem, VehicleRoutingProblemBuilder},
    },
    solution::Solution,
    solver::{solver::Solver, solver_params::SolverParams},
};

/// A stop already planned in a previous run. Its window and service duration must be the
/// ones it was planned with.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct ServedStop {
    pub address: String,
    pub time_window: TimeWindow,
    pub service_duration: Seconds,
}

/// Plans the dropped stops of a previous run again, together with the stops it served.
///
/// Nodes are laid out as the depot, then `served` in order, then `dropped` in order. Dropped
/// stops come back with a full-day window and the default service duration.
#[derive(Debug, Clone)]
pub struct ReoptimizationRequest {
    pub depot: String,
    pub served: Vec<ServedStop>,
    pub dropped: Vec<String>,
    pub vehicle_count: usize,
    pub time_dimension: Option<TimeDimension>,
}

impl ReoptimizationRequest {
    pub fn addresses(&self) -> Vec<String> {
        std::iter::once(self.depot.clone())
            .chain(self.served.iter().map(|stop| stop.address.clone()))
            .chain(self.dropped.iter().cloned())
            .collect()
    }

    pub fn build_problem(
        &self,
        travel_times: Vec<Vec<Seconds>>,
    ) -> Result<VehicleRoutingProblem, InstanceError> {
        let reentry_service = DEFAULT_SERVICE_DURATION.as_secs();

        let time_windows = std::iter::once(DEPOT_TIME_WINDOW)
            .chain(self.served.iter().map(|stop| stop.time_window))
            .chain(self.dropped.iter().map(|_| REENTRY_TIME_WINDOW))
            .collect();

        let service_durations = std::iter::once(0)
            .chain(self.served.iter().map(|stop| stop.service_duration))
            .chain(self.dropped.iter().map(|_| reentry_service))
            .collect();

        let mut builder = VehicleRoutingProblemBuilder::default();
        builder
            .set_travel_times(travel_times)
            .set_time_windows(time_windows)
            .set_service_durations(service_durations)
            .set_vehicle_count(self.vehicle_count);

        if let Some(time_dimension) = self.time_dimension {
            builder.set_time_dimension(time_dimension);
        }

        builder.build()
    }
}

/// Fetches travel times for the combined stops and solves from scratch. A provider failure
/// surfaces as an invalid instance.
#[instrument(skip_all, level = "debug")]
pub async fn reoptimize<C>(
    request: &ReoptimizationRequest,
    client: &TravelMatrixClient<C>,
    provider: &TravelMatrixProvider,
    params: SolverParams,
) -> Result<Solution, OptimizerError>
where
    C: MatricesCache,
{
    info!(
        served = request.served.len(),
        dropped = request.dropped.len(),
        "Re-optimizing dropped stops"
    );

    let matrices = client.fetch_matrix(&request.addresses(), provider).await?;
    let problem = request.build_problem(matrices.into_times())?;

    Solver::new(problem, params).solve()
}
