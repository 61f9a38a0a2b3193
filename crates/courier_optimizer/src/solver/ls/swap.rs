use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        ls::r#move::LocalSearchOperator,
        solution::{
            route_change::RouteChange, route_id::RouteIdx, working_solution::WorkingSolution,
        },
    },
};

/// **Intra-Route Swap**
///
/// Exchanges the stops at `first` and `second`, with `first < second`.
///
/// ```text
/// BEFORE: ... (A) -> [first] -> (B) ... (C) -> [second] -> (D) ...
/// AFTER:  ... (A) -> [second] -> (B) ... (C) -> [first] -> (D) ...
/// ```
#[derive(Debug)]
pub struct SwapOperator {
    params: SwapOperatorParams,
}

#[derive(Debug)]
pub struct SwapOperatorParams {
    pub route_id: RouteIdx,
    pub first: usize,
    pub second: usize,
}

impl SwapOperator {
    pub fn new(params: SwapOperatorParams) -> Self {
        debug_assert!(params.first < params.second);
        Self { params }
    }
}

impl LocalSearchOperator for SwapOperator {
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

        let len = solution.route(r1).len();
        for first in 0..len {
            // Adjacent stops are covered by relocate.
            for second in (first + 2)..len {
                consumer(SwapOperator::new(SwapOperatorParams {
                    route_id: r1,
                    first,
                    second,
                }));
            }
        }
    }

    fn route_changes(&self, solution: &WorkingSolution) -> Vec<RouteChange> {
        let SwapOperatorParams {
            route_id,
            first,
            second,
        } = self.params;
        let route = solution.route(route_id);

        let nodes = std::iter::once(route.node(second))
            .chain(route.nodes_iter(first + 1, second))
            .chain(std::iter::once(route.node(first)))
            .collect();

        vec![RouteChange::new(route_id, first, second + 1, nodes)]
    }
}
