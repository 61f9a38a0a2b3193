use jiff::SignedDuration;
use tracing::warn;

use crate::{error::InstanceError, utils::enumerate_idx::EnumerateIdx};

use super::{
    node::{DEPOT, Node, NodeIdx},
    time_dimension::TimeDimension,
    time_window::TimeWindow,
    travel_time_matrix::{Cost, Seconds, TravelTimeMatrix},
    vehicle::{Vehicle, VehicleIdx},
};

/// Cost of leaving a stop unserved, in seconds-equivalent.
pub const DEFAULT_SKIP_PENALTY: Cost = 10_000_000;

pub struct VehicleRoutingProblem {
    nodes: Vec<Node>,
    travel_times: TravelTimeMatrix,
    vehicles: Vec<Vehicle>,
    time_dimension: TimeDimension,
    skip_penalty: Cost,
}

impl VehicleRoutingProblem {
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, node: NodeIdx) -> &Node {
        &self.nodes[node]
    }

    /// Every node except the depot.
    pub fn customers(&self) -> impl Iterator<Item = NodeIdx> + use<> {
        (1..self.nodes.len()).map(NodeIdx::new)
    }

    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    #[inline(always)]
    pub fn travel_time(&self, from: NodeIdx, to: NodeIdx) -> Seconds {
        self.travel_times.travel_time(from, to)
    }

    #[inline(always)]
    pub fn service_duration(&self, node: NodeIdx) -> Seconds {
        self.nodes[node].service_duration()
    }

    /// Arc cost and clock increment: travel time plus the service at `from`.
    #[inline(always)]
    pub fn transit_cost(&self, from: NodeIdx, to: NodeIdx) -> Cost {
        self.travel_time(from, to) + self.service_duration(from)
    }

    pub fn window_for(&self, node: NodeIdx) -> TimeWindow {
        self.nodes[node].time_window()
    }

    pub fn time_dimension(&self) -> &TimeDimension {
        &self.time_dimension
    }

    /// Returns `(slack_ceiling, max_duration)`. Every vehicle shares the same bounds.
    pub fn time_dimension_bounds(&self, _vehicle_id: VehicleIdx) -> (SignedDuration, SignedDuration) {
        (
            self.time_dimension.slack_ceiling,
            self.time_dimension.max_duration,
        )
    }

    pub fn skip_penalty(&self) -> Cost {
        self.skip_penalty
    }

    /// Upper bound on the arc costs of any set of routes: every node leaves once through its
    /// most expensive arc, and the depot once more per extra vehicle.
    pub fn max_routing_cost(&self) -> Cost {
        let per_node: Cost = self
            .nodes
            .iter()
            .enumerate_idx()
            .map(|(node, _): (NodeIdx, &Node)| {
                self.travel_times.max_travel_time_from(node) + self.service_duration(node)
            })
            .sum();

        let extra_departures = self.vehicles.len().saturating_sub(1) as Cost
            * (self.travel_times.max_travel_time_from(DEPOT) + self.service_duration(DEPOT));

        per_node + extra_departures
    }

    /// Whether serving a stop always beats skipping it. When this is false, the search may
    /// prefer dropping a reachable stop over an expensive detour.
    pub fn is_skip_penalty_dominant(&self) -> bool {
        self.skip_penalty > self.max_routing_cost()
    }
}

#[derive(Default)]
pub struct VehicleRoutingProblemBuilder {
    travel_times: Option<Vec<Vec<Seconds>>>,
    time_windows: Option<Vec<TimeWindow>>,
    service_durations: Option<Vec<Seconds>>,
    vehicle_count: Option<usize>,
    time_dimension: Option<TimeDimension>,
    skip_penalty: Option<Cost>,
}

impl VehicleRoutingProblemBuilder {
    pub fn set_travel_times(
        &mut self,
        travel_times: Vec<Vec<Seconds>>,
    ) -> &mut VehicleRoutingProblemBuilder {
        self.travel_times = Some(travel_times);
        self
    }

    pub fn set_time_windows(
        &mut self,
        time_windows: Vec<TimeWindow>,
    ) -> &mut VehicleRoutingProblemBuilder {
        self.time_windows = Some(time_windows);
        self
    }

    pub fn set_service_durations(
        &mut self,
        service_durations: Vec<Seconds>,
    ) -> &mut VehicleRoutingProblemBuilder {
        self.service_durations = Some(service_durations);
        self
    }

    pub fn set_vehicle_count(&mut self, vehicle_count: usize) -> &mut VehicleRoutingProblemBuilder {
        self.vehicle_count = Some(vehicle_count);
        self
    }

    pub fn set_time_dimension(
        &mut self,
        time_dimension: TimeDimension,
    ) -> &mut VehicleRoutingProblemBuilder {
        self.time_dimension = Some(time_dimension);
        self
    }

    pub fn set_skip_penalty(&mut self, skip_penalty: Cost) -> &mut VehicleRoutingProblemBuilder {
        self.skip_penalty = Some(skip_penalty);
        self
    }

    pub fn build(self) -> Result<VehicleRoutingProblem, InstanceError> {
        let travel_times = TravelTimeMatrix::from_rows(self.travel_times.unwrap_or_default())?;
        let num_nodes = travel_times.num_nodes();

        let time_windows = self.time_windows.unwrap_or_default();
        if time_windows.len() != num_nodes {
            return Err(InstanceError::LengthMismatch {
                what: "time windows",
                expected: num_nodes,
                actual: time_windows.len(),
            });
        }

        let service_durations = self.service_durations.unwrap_or_default();
        if service_durations.len() != num_nodes {
            return Err(InstanceError::LengthMismatch {
                what: "service durations",
                expected: num_nodes,
                actual: service_durations.len(),
            });
        }

        let vehicle_count = self.vehicle_count.unwrap_or(0);
        if vehicle_count == 0 {
            return Err(InstanceError::NoVehicles);
        }

        let nodes = time_windows
            .into_iter()
            .zip(service_durations)
            .enumerate_idx()
            .map(|(node, (time_window, service_duration)): (NodeIdx, _)| {
                if time_window.is_inverted() {
                    return Err(InstanceError::InvertedTimeWindow {
                        node,
                        earliest: time_window.earliest,
                        latest: time_window.latest,
                    });
                }

                if service_duration < 0 {
                    return Err(InstanceError::NegativeServiceDuration { node });
                }

                Ok(Node::new(time_window, service_duration))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let problem = VehicleRoutingProblem {
            nodes,
            travel_times,
            vehicles: vec![Vehicle::default(); vehicle_count],
            time_dimension: self.time_dimension.unwrap_or_default(),
            skip_penalty: self.skip_penalty.unwrap_or(DEFAULT_SKIP_PENALTY),
        };

        if !problem.is_skip_penalty_dominant() {
            warn!(
                skip_penalty = problem.skip_penalty,
                max_routing_cost = problem.max_routing_cost(),
                "Skip penalty does not dominate the routing costs, reachable stops may be dropped"
            );
        }

        Ok(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(n: usize) -> VehicleRoutingProblemBuilder {
        let mut builder = VehicleRoutingProblemBuilder::default();
        builder
            .set_travel_times(vec![vec![600; n]; n])
            .set_time_windows(vec![TimeWindow::new(0, 82_800); n])
            .set_service_durations(vec![300; n])
            .set_vehicle_count(1);
        builder
    }

    #[test]
    fn test_transit_cost_includes_service_at_origin() {
        let mut builder = builder(3);
        builder.set_service_durations(vec![0, 300, 120]);
        let problem = builder.build().unwrap();

        assert_eq!(problem.transit_cost(NodeIdx::new(0), NodeIdx::new(1)), 600);
        assert_eq!(problem.transit_cost(NodeIdx::new(1), NodeIdx::new(2)), 900);
        assert_eq!(problem.transit_cost(NodeIdx::new(2), NodeIdx::new(0)), 720);
        assert_eq!(problem.customers().count(), 2);
    }

    #[test]
    fn test_default_bounds() {
        let problem = builder(2).build().unwrap();
        let (slack, max_duration) = problem.time_dimension_bounds(VehicleIdx::new(0));

        assert_eq!(slack, SignedDuration::from_hours(6));
        assert_eq!(max_duration, SignedDuration::from_hours(17));
        assert_eq!(problem.skip_penalty(), DEFAULT_SKIP_PENALTY);
        assert!(problem.is_skip_penalty_dominant());
    }

    #[test]
    fn test_custom_bounds() {
        let mut builder = builder(2);
        builder.set_time_dimension(TimeDimension {
            slack_ceiling: SignedDuration::from_mins(30),
            max_duration: SignedDuration::from_hours(8),
        });
        let problem = builder.build().unwrap();

        assert_eq!(problem.time_dimension().slack_ceiling_secs(), 1800);
        assert_eq!(problem.time_dimension().max_duration_secs(), 28_800);
    }

    #[test]
    fn test_small_penalty_is_not_dominant() {
        let mut builder = builder(4);
        builder.set_skip_penalty(100);
        let problem = builder.build().unwrap();

        assert!(!problem.is_skip_penalty_dominant());
    }

    #[test]
    fn test_inverted_window() {
        let mut builder = builder(2);
        builder.set_time_windows(vec![TimeWindow::new(0, 100), TimeWindow::new(50, 10)]);

        assert_eq!(
            builder.build().err(),
            Some(InstanceError::InvertedTimeWindow {
                node: NodeIdx::new(1),
                earliest: 50,
                latest: 10
            })
        );
    }

    #[test]
    fn test_no_vehicles() {
        let mut builder = builder(2);
        builder.set_vehicle_count(0);

        assert_eq!(builder.build().err(), Some(InstanceError::NoVehicles));
    }

    #[test]
    fn test_length_mismatch() {
        let mut builder = builder(3);
        builder.set_service_durations(vec![0, 300]);

        assert_eq!(
            builder.build().err(),
            Some(InstanceError::LengthMismatch {
                what: "service durations",
                expected: 3,
                actual: 2
            })
        );

        let mut builder = self::builder(3);
        builder.set_service_durations(vec![0, -1, 0]);
        assert_eq!(
            builder.build().err(),
            Some(InstanceError::NegativeServiceDuration {
                node: NodeIdx::new(1)
            })
        );
    }
}
