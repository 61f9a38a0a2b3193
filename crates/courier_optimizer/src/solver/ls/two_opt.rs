use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        ls::r#move::LocalSearchOperator,
        solution::{
            route_change::RouteChange, route_id::RouteIdx, working_solution::WorkingSolution,
        },
    },
};

/// **Intra-Route 2-Opt**
///
/// Reverses the stops between `from` and `to`, both included.
///
/// ```text
/// BEFORE: (A) -> [from] -> (B) -> (C) -> [to] -> (D)
/// AFTER:  (A) -> [to] -> (C) -> (B) -> [from] -> (D)
/// ```
///
/// Travel times are not assumed symmetric, so the reversed run is re-evaluated as a whole.
#[derive(Debug)]
pub struct TwoOptOperator {
    params: TwoOptOperatorParams,
}

#[derive(Debug)]
pub struct TwoOptOperatorParams {
    pub route_id: RouteIdx,
    pub from: usize,
    pub to: usize,
}

impl TwoOptOperator {
    pub fn new(params: TwoOptOperatorParams) -> Self {
        debug_assert!(params.from < params.to);
        Self { params }
    }
}

impl LocalSearchOperator for TwoOptOperator {
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
        for from in 0..len {
            // Reversing two stops is a relocate, start at three.
            for to in (from + 2)..len {
                consumer(TwoOptOperator::new(TwoOptOperatorParams {
                    route_id: r1,
                    from,
                    to,
                }));
            }
        }
    }

    fn route_changes(&self, solution: &WorkingSolution) -> Vec<RouteChange> {
        let TwoOptOperatorParams { route_id, from, to } = self.params;
        let nodes = solution
            .route(route_id)
            .nodes_iter(from, to + 1)
            .rev()
            .collect();

        vec![RouteChange::new(route_id, from, to + 1, nodes)]
    }
}
