use crate::{
    problem::{
        travel_time_matrix::Cost, vehicle::VehicleIdx,
        vehicle_routing_problem::VehicleRoutingProblem,
    },
    solver::{disjunction::Disjunctions, insertion::Insertion, ls::arc_penalties::ArcPenalties},
    utils::enumerate_idx::EnumerateIdx,
};

use super::{route::WorkingSolutionRoute, route_change::RouteChange, route_id::RouteIdx};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveEvaluation {
    /// Change of the real objective: arc costs plus skip penalties.
    pub cost_delta: Cost,
    /// Change of the number of penalized arcs travelled.
    pub penalty_delta: i64,
}

impl MoveEvaluation {
    /// Objective seen by guided local search.
    #[inline]
    pub fn augmented_delta(&self, lambda: f64) -> f64 {
        self.cost_delta as f64 + lambda * self.penalty_delta as f64
    }
}

#[derive(Clone, Debug)]
pub struct WorkingSolution {
    routes: Vec<WorkingSolutionRoute>,
    disjunctions: Disjunctions,
}

impl WorkingSolution {
    pub fn new(problem: &VehicleRoutingProblem) -> Self {
        let routes = problem
            .vehicles()
            .iter()
            .enumerate_idx()
            .map(|(vehicle_id, _): (VehicleIdx, _)| WorkingSolutionRoute::empty(problem, vehicle_id))
            .collect();

        WorkingSolution {
            routes,
            disjunctions: Disjunctions::new(problem),
        }
    }

    pub fn routes(&self) -> &[WorkingSolutionRoute] {
        &self.routes
    }

    pub fn route(&self, route_id: RouteIdx) -> &WorkingSolutionRoute {
        &self.routes[route_id]
    }

    pub fn route_ids(&self) -> impl Iterator<Item = RouteIdx> + use<> {
        (0..self.routes.len()).map(RouteIdx::new)
    }

    pub fn disjunctions(&self) -> &Disjunctions {
        &self.disjunctions
    }

    pub fn routing_cost(&self, problem: &VehicleRoutingProblem) -> Cost {
        self.routes.iter().map(|route| route.cost(problem)).sum()
    }

    /// Arc costs plus the penalty of every skipped stop.
    pub fn cost(&self, problem: &VehicleRoutingProblem) -> Cost {
        self.routing_cost(problem) + self.disjunctions.total_penalty()
    }

    pub fn num_arcs(&self) -> usize {
        self.routes.iter().map(|route| route.arcs().count()).sum()
    }

    pub fn is_feasible(&self, problem: &VehicleRoutingProblem) -> bool {
        self.routes.iter().all(|route| {
            route.is_empty() || route.segment(problem).is_feasible(problem.time_dimension())
        })
    }

    /// Evaluates `changes` without applying them. Returns `None` when a touched route would
    /// break its windows or time dimension bounds.
    pub fn evaluate(
        &self,
        problem: &VehicleRoutingProblem,
        changes: &[RouteChange],
        penalties: Option<&ArcPenalties>,
    ) -> Option<MoveEvaluation> {
        let mut cost_delta = 0;
        let mut served_delta = 0;
        let mut penalty_delta = 0;

        for change in changes {
            let route = &self.routes[change.route_id];
            let new_len = (route.len() + change.nodes.len()) - change.removed_len();

            let new_cost = if new_len == 0 {
                0
            } else {
                let segment = route.evaluate_change(
                    problem,
                    change.nodes.iter().copied(),
                    change.start,
                    change.end,
                );

                if !segment.is_feasible(problem.time_dimension()) {
                    return None;
                }

                segment.cost
            };

            cost_delta += new_cost - route.cost(problem);
            served_delta += change.served_delta();

            if let Some(penalties) = penalties {
                penalty_delta += route.arc_penalty_delta(penalties, change);
            }
        }

        Some(MoveEvaluation {
            cost_delta: cost_delta - served_delta * self.disjunctions.penalty(),
            penalty_delta,
        })
    }

    /// Applies `changes`, at most one per route, and records where every moved stop ended up.
    pub fn apply(&mut self, problem: &VehicleRoutingProblem, changes: &[RouteChange]) {
        for change in changes {
            let route = &mut self.routes[change.route_id];

            for &node in &route.nodes()[change.start..change.end] {
                self.disjunctions.set_skipped(node);
            }

            route.replace_nodes(problem, &change.nodes, change.start, change.end);
        }

        for change in changes {
            self.index_route(change.route_id);
        }
    }

    pub fn insert(&mut self, problem: &VehicleRoutingProblem, insertion: &Insertion) {
        self.apply(problem, &[insertion.route_change()]);
    }

    fn index_route(&mut self, route_id: RouteIdx) {
        for (position, &node) in self.routes[route_id].nodes().iter().enumerate() {
            self.disjunctions.set_visited(node, route_id, position);
        }
    }
}
