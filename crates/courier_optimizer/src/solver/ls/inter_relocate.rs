use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        ls::r#move::LocalSearchOperator,
        solution::{
            route_change::RouteChange, route_id::RouteIdx, working_solution::WorkingSolution,
        },
    },
};

/// **Inter-Route Relocate**
///
/// Moves the stop at `from` in `from_route_id` before position `to` of `to_route_id`.
///
/// ```text
/// BEFORE:
///    R1: ... (A) -> [from] -> (B) ...
///    R2: ... (X) -> (Y) ...
///
/// AFTER:
///    R1: ... (A) -> (B) ...
///    R2: ... (X) -> [from] -> (Y) ...
/// ```
#[derive(Debug)]
pub struct InterRelocateOperator {
    params: InterRelocateParams,
}

#[derive(Debug)]
pub struct InterRelocateParams {
    pub from_route_id: RouteIdx,
    pub to_route_id: RouteIdx,
    pub from: usize,
    pub to: usize,
}

impl InterRelocateOperator {
    pub fn new(params: InterRelocateParams) -> Self {
        debug_assert!(params.from_route_id != params.to_route_id);
        Self { params }
    }
}

impl LocalSearchOperator for InterRelocateOperator {
    fn generate_moves<C>(
        _problem: &VehicleRoutingProblem,
        solution: &WorkingSolution,
        (r1, r2): (RouteIdx, RouteIdx),
        mut consumer: C,
    ) where
        C: FnMut(Self),
    {
        if r1 == r2 {
            return;
        }

        let from_len = solution.route(r1).len();
        let to_len = solution.route(r2).len();

        for from in 0..from_len {
            for to in 0..=to_len {
                consumer(InterRelocateOperator::new(InterRelocateParams {
                    from_route_id: r1,
                    to_route_id: r2,
                    from,
                    to,
                }));
            }
        }
    }

    fn route_changes(&self, solution: &WorkingSolution) -> Vec<RouteChange> {
        let InterRelocateParams {
            from_route_id,
            to_route_id,
            from,
            to,
        } = self.params;
        let node = solution.route(from_route_id).node(from);

        vec![
            RouteChange::new(from_route_id, from, from + 1, vec![]),
            RouteChange::new(to_route_id, to, to, vec![node]),
        ]
    }
}
