use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    problem::{time_slot::TimeSlot, travel_time_matrix::Seconds},
    solution::{Solution, VisitRecord},
};

/// What a node stands for in the request it was built from.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct StopInfo {
    pub address: String,
    pub time_slot: TimeSlot,
    pub service_minutes: u32,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct PlannedStop {
    pub address: String,
    /// `HH:MM`
    pub arrival: String,
    pub service_minutes: i64,
    /// `HH:MM`
    pub departure: String,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct PlannedRoute {
    /// 1-based, counting used vehicles only.
    pub vehicle: usize,
    /// Depot departure first, depot return last.
    pub stops: Vec<PlannedStop>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct UnservedStop {
    pub address: String,
    pub time_slot: TimeSlot,
    pub service_minutes: u32,
}

/// A solution expressed with addresses and wall clock times.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    pub routes: Vec<PlannedRoute>,
    pub unserved: Vec<UnservedStop>,
}

/// Formats seconds from midnight as `HH:MM`.
pub fn format_clock(seconds: Seconds) -> String {
    let duration = SignedDuration::from_secs(seconds);
    let hours = duration.as_hours();
    let minutes = duration.as_mins() - hours * 60;

    format!("{hours:02}:{minutes:02}")
}

impl Plan {
    /// `stops[i]` describes node `i`.
    pub fn new(solution: &Solution, stops: &[StopInfo]) -> Self {
        let address = |visit: &VisitRecord| {
            stops
                .get(visit.node.get())
                .map(|stop| stop.address.clone())
                .unwrap_or_else(|| format!("#{}", visit.node))
        };

        let routes = solution
            .routes
            .iter()
            .filter(|route| !route.is_empty())
            .enumerate()
            .map(|(index, route)| PlannedRoute {
                vehicle: index + 1,
                stops: route
                    .visits
                    .iter()
                    .map(|visit| PlannedStop {
                        address: address(visit),
                        arrival: format_clock(visit.arrival),
                        service_minutes: SignedDuration::from_secs(visit.service).as_mins(),
                        departure: format_clock(visit.departure),
                    })
                    .collect(),
            })
            .collect();

        let unserved = solution
            .unserved
            .iter()
            .filter_map(|node| stops.get(node.get()))
            .map(|stop| UnservedStop {
                address: stop.address.clone(),
                time_slot: stop.time_slot,
                service_minutes: stop.service_minutes,
            })
            .collect();

        Plan { routes, unserved }
    }

    pub fn num_planned_stops(&self) -> usize {
        self.routes
            .iter()
            .map(|route| route.stops.len().saturating_sub(2))
            .sum()
    }
}
