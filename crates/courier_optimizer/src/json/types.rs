use courier_matrix_providers::{
    cache::MatricesCache,
    travel_matrix_client::TravelMatrixClient,
    travel_matrix_provider::{TravelMatrixProvider, TravelMode},
};
use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::{InstanceError, OptimizerError},
    plan::StopInfo,
    problem::{
        time_dimension::TimeDimension,
        time_slot::{DEFAULT_SERVICE_DURATION, DEPOT_TIME_WINDOW, TimeSlot},
        travel_time_matrix::Seconds,
        vehicle_routing_problem::{VehicleRoutingProblem, VehicleRoutingProblemBuilder},
    },
    reoptimize::{ReoptimizationRequest, ServedStop},
};

fn default_service_minutes() -> u32 {
    DEFAULT_SERVICE_DURATION.as_mins() as u32
}

fn default_vehicles() -> usize {
    1
}

fn default_matrix_provider() -> TravelMatrixProvider {
    TravelMatrixProvider::GoogleDistanceMatrix {
        mode: TravelMode::Driving,
    }
}

fn minutes_to_seconds(minutes: u32) -> Seconds {
    SignedDuration::from_mins(minutes as i64).as_secs()
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename = "Stop")]
pub struct JsonStop {
    pub address: String,

    #[serde(default)]
    pub time_slot: TimeSlot,

    #[serde(default = "default_service_minutes")]
    pub service_minutes: u32,
}

impl JsonStop {
    fn info(&self) -> StopInfo {
        StopInfo {
            address: self.address.clone(),
            time_slot: self.time_slot,
            service_minutes: self.service_minutes,
        }
    }
}

fn depot_info(depot: &str) -> StopInfo {
    StopInfo {
        address: depot.to_owned(),
        time_slot: TimeSlot::AllDay,
        service_minutes: 0,
    }
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "RoutingRequest")]
pub struct JsonRoutingRequest {
    pub depot: String,

    #[serde(default = "default_vehicles")]
    pub vehicles: usize,

    pub stops: Vec<JsonStop>,

    #[serde(default = "default_matrix_provider")]
    pub matrix_provider: TravelMatrixProvider,

    #[serde(default)]
    pub time_dimension: Option<TimeDimension>,
}

impl JsonRoutingRequest {
    /// Depot first, then the stops in request order.
    pub fn addresses(&self) -> Vec<String> {
        std::iter::once(self.depot.clone())
            .chain(self.stops.iter().map(|stop| stop.address.clone()))
            .collect()
    }

    pub fn stop_infos(&self) -> Vec<StopInfo> {
        std::iter::once(depot_info(&self.depot))
            .chain(self.stops.iter().map(JsonStop::info))
            .collect()
    }

    pub fn build_problem(
        &self,
        travel_times: Vec<Vec<Seconds>>,
    ) -> Result<VehicleRoutingProblem, InstanceError> {
        let time_windows = std::iter::once(DEPOT_TIME_WINDOW)
            .chain(self.stops.iter().map(|stop| stop.time_slot.time_window()))
            .collect();

        let service_durations = std::iter::once(0)
            .chain(
                self.stops
                    .iter()
                    .map(|stop| minutes_to_seconds(stop.service_minutes)),
            )
            .collect();

        let mut builder = VehicleRoutingProblemBuilder::default();
        builder
            .set_travel_times(travel_times)
            .set_time_windows(time_windows)
            .set_service_durations(service_durations)
            .set_vehicle_count(self.vehicles);

        if let Some(time_dimension) = self.time_dimension {
            builder.set_time_dimension(time_dimension);
        }

        builder.build()
    }

    #[instrument(skip_all, level = "debug")]
    pub async fn fetch_problem(
        &self,
        client: &TravelMatrixClient<impl MatricesCache>,
    ) -> Result<VehicleRoutingProblem, OptimizerError> {
        let matrices = client
            .fetch_matrix(&self.addresses(), &self.matrix_provider)
            .await?;

        Ok(self.build_problem(matrices.into_times())?)
    }
}

/// A previous plan's stops: `served` keep their slot and service time, `dropped` are
/// planned again over the whole day.
#[derive(Deserialize, JsonSchema, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "ReoptimizationRequest")]
pub struct JsonReoptimizationRequest {
    pub depot: String,

    #[serde(default = "default_vehicles")]
    pub vehicles: usize,

    #[serde(default)]
    pub served: Vec<JsonStop>,

    pub dropped: Vec<String>,

    #[serde(default = "default_matrix_provider")]
    pub matrix_provider: TravelMatrixProvider,

    #[serde(default)]
    pub time_dimension: Option<TimeDimension>,
}

impl JsonReoptimizationRequest {
    pub fn stop_infos(&self) -> Vec<StopInfo> {
        std::iter::once(depot_info(&self.depot))
            .chain(self.served.iter().map(JsonStop::info))
            .chain(self.dropped.iter().map(|address| StopInfo {
                address: address.clone(),
                time_slot: TimeSlot::AllDay,
                service_minutes: default_service_minutes(),
            }))
            .collect()
    }

    pub fn to_request(&self) -> ReoptimizationRequest {
        ReoptimizationRequest {
            depot: self.depot.clone(),
            served: self
                .served
                .iter()
                .map(|stop| ServedStop {
                    address: stop.address.clone(),
                    time_window: stop.time_slot.time_window(),
                    service_duration: minutes_to_seconds(stop.service_minutes),
                })
                .collect(),
            dropped: self.dropped.clone(),
            vehicle_count: self.vehicles,
            time_dimension: self.time_dimension,
        }
    }
}
