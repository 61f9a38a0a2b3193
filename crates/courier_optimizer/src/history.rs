use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::plan::Plan;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize history row: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("History sink failed: {0}")]
    Sink(String),
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopType {
    DepotDeparture,
    Pickup,
    DepotReturn,
}

/// One visit of a delivered plan.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub timestamp: Timestamp,
    pub actor: String,
    pub vehicle: usize,
    pub order: usize,
    pub stop_type: StopType,
    pub address: String,
    pub arrival: String,
    pub wait_minutes: i64,
    pub departure: String,
}

/// Destination of the run history.
pub trait HistorySink {
    fn append(&mut self, rows: &[HistoryRow]) -> Result<(), HistoryError>;
}

impl HistorySink for Vec<HistoryRow> {
    fn append(&mut self, rows: &[HistoryRow]) -> Result<(), HistoryError> {
        self.extend_from_slice(rows);
        Ok(())
    }
}

pub fn history_rows(plan: &Plan, actor: &str, timestamp: Timestamp) -> Vec<HistoryRow> {
    plan.routes
        .iter()
        .flat_map(|route| {
            let last = route.stops.len().saturating_sub(1);

            route.stops.iter().enumerate().map(move |(order, stop)| {
                let stop_type = if order == 0 {
                    StopType::DepotDeparture
                } else if order == last {
                    StopType::DepotReturn
                } else {
                    StopType::Pickup
                };

                HistoryRow {
                    timestamp,
                    actor: actor.to_owned(),
                    vehicle: route.vehicle,
                    order,
                    stop_type,
                    address: stop.address.clone(),
                    arrival: stop.arrival.clone(),
                    wait_minutes: stop.service_minutes,
                    departure: stop.departure.clone(),
                }
            })
        })
        .collect()
}

/// Appends one row per visit of `plan` to `sink`. Sink failures are logged and swallowed.
/// Returns the number of rows written.
pub fn record_history<S>(sink: &mut S, plan: &Plan, actor: &str, timestamp: Timestamp) -> usize
where
    S: HistorySink + ?Sized,
{
    let rows = history_rows(plan, actor, timestamp);
    if rows.is_empty() {
        info!("No routes to record in the history");
        return 0;
    }

    match sink.append(&rows) {
        Ok(()) => {
            info!(rows = rows.len(), "Recorded route history");
            rows.len()
        }
        Err(err) => {
            warn!("Could not record route history: {err}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::plan::{PlannedRoute, PlannedStop};

    use super::*;

    struct FailingSink;

    impl HistorySink for FailingSink {
        fn append(&mut self, _rows: &[HistoryRow]) -> Result<(), HistoryError> {
            Err(HistoryError::Sink("disk full".to_owned()))
        }
    }

    fn stop(address: &str, arrival: &str, service_minutes: i64, departure: &str) -> PlannedStop {
        PlannedStop {
            address: address.to_owned(),
            arrival: arrival.to_owned(),
            service_minutes,
            departure: departure.to_owned(),
        }
    }

    fn plan() -> Plan {
        Plan {
            routes: vec![PlannedRoute {
                vehicle: 1,
                stops: vec![
                    stop("Depot", "06:00", 0, "06:00"),
                    stop("A", "06:10", 5, "06:15"),
                    stop("B", "06:30", 10, "06:40"),
                    stop("Depot", "07:00", 0, "07:00"),
                ],
            }],
            unserved: vec![],
        }
    }

    #[test]
    fn test_rows_are_typed_by_position() {
        let mut sink: Vec<HistoryRow> = Vec::new();
        let written = record_history(&mut sink, &plan(), "dispatcher", Timestamp::UNIX_EPOCH);

        assert_eq!(written, 4);
        let types: Vec<StopType> = sink.iter().map(|row| row.stop_type).collect();
        assert_eq!(
            types,
            vec![
                StopType::DepotDeparture,
                StopType::Pickup,
                StopType::Pickup,
                StopType::DepotReturn
            ]
        );
        assert_eq!(sink[2].order, 2);
        assert_eq!(sink[2].wait_minutes, 10);
        assert_eq!(sink[2].actor, "dispatcher");
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let written = record_history(&mut FailingSink, &plan(), "dispatcher", Timestamp::now());
        assert_eq!(written, 0);
    }

    #[test]
    fn test_empty_plan_writes_nothing() {
        let mut sink: Vec<HistoryRow> = Vec::new();
        let written = record_history(&mut sink, &Plan::default(), "dispatcher", Timestamp::now());

        assert_eq!(written, 0);
        assert!(sink.is_empty());
    }
}
