use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        ls::r#move::LocalSearchOperator,
        solution::{
            route_change::RouteChange, route_id::RouteIdx, working_solution::WorkingSolution,
        },
    },
};

/// **Inter-Route Swap**
///
/// Exchanges the stop at `first` in `first_route_id` with the stop at `second` in
/// `second_route_id`.
#[derive(Debug)]
pub struct InterSwapOperator {
    params: InterSwapOperatorParams,
}

#[derive(Debug)]
pub struct InterSwapOperatorParams {
    pub first_route_id: RouteIdx,
    pub second_route_id: RouteIdx,
    pub first: usize,
    pub second: usize,
}

impl InterSwapOperator {
    pub fn new(params: InterSwapOperatorParams) -> Self {
        debug_assert!(params.first_route_id != params.second_route_id);
        Self { params }
    }
}

impl LocalSearchOperator for InterSwapOperator {
    fn generate_moves<C>(
        _problem: &VehicleRoutingProblem,
        solution: &WorkingSolution,
        (r1, r2): (RouteIdx, RouteIdx),
        mut consumer: C,
    ) where
        C: FnMut(Self),
    {
        // Symmetric, only look at each pair of routes once.
        if r1 >= r2 {
            return;
        }

        for first in 0..solution.route(r1).len() {
            for second in 0..solution.route(r2).len() {
                consumer(InterSwapOperator::new(InterSwapOperatorParams {
                    first_route_id: r1,
                    second_route_id: r2,
                    first,
                    second,
                }));
            }
        }
    }

    fn route_changes(&self, solution: &WorkingSolution) -> Vec<RouteChange> {
        let InterSwapOperatorParams {
            first_route_id,
            second_route_id,
            first,
            second,
        } = self.params;
        let first_node = solution.route(first_route_id).node(first);
        let second_node = solution.route(second_route_id).node(second);

        vec![
            RouteChange::new(first_route_id, first, first + 1, vec![second_node]),
            RouteChange::new(second_route_id, second, second + 1, vec![first_node]),
        ]
    }
}
