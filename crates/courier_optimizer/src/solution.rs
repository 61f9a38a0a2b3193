use fixedbitset::FixedBitSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    problem::{
        node::NodeIdx,
        travel_time_matrix::{Cost, Seconds},
        vehicle::VehicleIdx,
        vehicle_routing_problem::VehicleRoutingProblem,
    },
    solver::solution::{route::WorkingSolutionRoute, working_solution::WorkingSolution},
};

/// One stop of a route with its schedule, in seconds from the day epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VisitRecord {
    pub node: NodeIdx,
    pub arrival: Seconds,
    pub service: Seconds,
    pub departure: Seconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Route {
    pub vehicle_id: VehicleIdx,
    /// Starts with the depot departure and ends with the depot return.
    pub visits: Vec<VisitRecord>,
}

impl Route {
    /// A vehicle that never leaves the depot.
    pub fn is_empty(&self) -> bool {
        self.visits.len() <= 2
    }

    /// Visits between the two depot endpoints.
    pub fn stops(&self) -> &[VisitRecord] {
        if self.visits.len() < 2 {
            &[]
        } else {
            &self.visits[1..self.visits.len() - 1]
        }
    }

    /// Time from leaving the depot to coming back.
    pub fn elapsed(&self) -> Seconds {
        match (self.visits.first(), self.visits.last()) {
            (Some(first), Some(last)) => last.arrival - first.arrival,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Solution {
    /// One route per vehicle, empty ones included.
    pub routes: Vec<Route>,
    /// Stops no route visits, in node order.
    pub unserved: Vec<NodeIdx>,
    /// Arc costs plus skip penalties.
    pub cost: Cost,
}

impl Solution {
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|route| route.stops().len()).sum()
    }
}

fn extract_route(problem: &VehicleRoutingProblem, route: &WorkingSolutionRoute) -> Route {
    // The earliest start reaching the minimum duration.
    let start = route.segment(problem).earliest;
    let vehicle = problem.vehicle(route.vehicle_id());
    let depot_service = if route.is_empty() {
        0
    } else {
        problem.service_duration(vehicle.start())
    };

    let mut visits = Vec::with_capacity(route.len() + 2);
    visits.push(VisitRecord {
        node: vehicle.start(),
        arrival: start,
        service: depot_service,
        departure: start + depot_service,
    });

    if !route.is_empty() {
        let mut previous = vehicle.start();
        let mut departure = start + depot_service;

        for &node in route.nodes() {
            let arrival = (departure + problem.travel_time(previous, node))
                .max(problem.window_for(node).earliest);
            let service = problem.service_duration(node);

            visits.push(VisitRecord {
                node,
                arrival,
                service,
                departure: arrival + service,
            });

            previous = node;
            departure = arrival + service;
        }

        let arrival = departure + problem.travel_time(previous, vehicle.end());
        visits.push(VisitRecord {
            node: vehicle.end(),
            arrival,
            service: 0,
            departure: arrival,
        });
    } else {
        visits.push(VisitRecord {
            node: vehicle.end(),
            arrival: start,
            service: 0,
            departure: start,
        });
    }

    Route {
        vehicle_id: route.vehicle_id(),
        visits,
    }
}

/// Schedules every route as early as its minimum duration allows and lists the stops left
/// out.
pub fn extract_solution(problem: &VehicleRoutingProblem, solution: &WorkingSolution) -> Solution {
    let mut served = FixedBitSet::with_capacity(problem.num_nodes());
    for route in solution.routes() {
        for node in route.nodes() {
            served.insert(node.get());
        }
    }

    let unserved = problem
        .customers()
        .filter(|node| !served.contains(node.get()))
        .collect();

    Solution {
        routes: solution
            .routes()
            .iter()
            .map(|route| extract_route(problem, route))
            .collect(),
        unserved,
        cost: solution.cost(problem),
    }
}
