use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        ls::r#move::LocalSearchOperator,
        solution::{
            route_change::RouteChange, route_id::RouteIdx, working_solution::WorkingSolution,
        },
    },
};

/// Skips the stop at `position`. Only improving when the skip penalty is smaller than the
/// detour the stop costs.
#[derive(Debug)]
pub struct DeactivateOperator {
    params: DeactivateOperatorParams,
}

#[derive(Debug)]
pub struct DeactivateOperatorParams {
    pub route_id: RouteIdx,
    pub position: usize,
}

impl DeactivateOperator {
    pub fn new(params: DeactivateOperatorParams) -> Self {
        Self { params }
    }
}

impl LocalSearchOperator for DeactivateOperator {
    fn generate_moves<C>(
        _problem: &VehicleRoutingProblem,
        solution: &WorkingSolution,
        (r1, r2): (RouteIdx, RouteIdx),
        mut consumer: C,
    ) where
        C: FnMut(Self),
    {
        if r1 != r2 {
            return;
        }

        for position in 0..solution.route(r1).len() {
            consumer(DeactivateOperator::new(DeactivateOperatorParams {
                route_id: r1,
                position,
            }));
        }
    }

    fn route_changes(&self, _solution: &WorkingSolution) -> Vec<RouteChange> {
        let DeactivateOperatorParams { route_id, position } = self.params;

        vec![RouteChange::new(route_id, position, position + 1, vec![])]
    }
}
