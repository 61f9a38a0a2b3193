use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        ls::r#move::LocalSearchOperator,
        solution::{
            route_change::RouteChange, route_id::RouteIdx, working_solution::WorkingSolution,
        },
    },
};

/// **Intra-Route Relocate**
///
/// Moves the stop at `from` so that it ends up before the stop currently at `to`.
///
/// ```text
/// BEFORE:
///    Route: ... (A) -> [from] -> (C) ... (X) -> (Y) ...
///
/// AFTER:
///    Route: ... (A) -> (C) ... (X) -> [from] -> (Y) ...
/// ```
#[derive(Debug)]
pub struct RelocateOperator {
    params: RelocateOperatorParams,
}

#[derive(Debug)]
pub struct RelocateOperatorParams {
    pub route_id: RouteIdx,
    pub from: usize,
    pub to: usize,
}

impl RelocateOperator {
    pub fn new(params: RelocateOperatorParams) -> Self {
        debug_assert!(params.from != params.to && params.from + 1 != params.to);
        Self { params }
    }
}

impl LocalSearchOperator for RelocateOperator {
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
            for to in 0..=len {
                if to == from || to == from + 1 {
                    continue;
                }

                consumer(RelocateOperator::new(RelocateOperatorParams {
                    route_id: r1,
                    from,
                    to,
                }));
            }
        }
    }

    fn route_changes(&self, solution: &WorkingSolution) -> Vec<RouteChange> {
        let RelocateOperatorParams { route_id, from, to } = self.params;
        let route = solution.route(route_id);
        let node = route.node(from);

        let change = if from < to {
            // A [B] C D E F, moving B before F: C D E B
            let nodes = route
                .nodes_iter(from + 1, to)
                .chain(std::iter::once(node))
                .collect();
            RouteChange::new(route_id, from, to, nodes)
        } else {
            // A B C D [E] F, moving E before B: E B C D
            let nodes = std::iter::once(node)
                .chain(route.nodes_iter(to, from))
                .collect();
            RouteChange::new(route_id, to, from + 1, nodes)
        };

        vec![change]
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        problem::node::NodeIdx,
        test_utils::{self, TestProblem},
    };

    use super::*;

    fn solution_with(problem: &VehicleRoutingProblem, ids: &[usize]) -> WorkingSolution {
        let mut solution = WorkingSolution::new(problem);
        let nodes = ids.iter().copied().map(NodeIdx::new).collect();
        solution.apply(problem, &[RouteChange::new(RouteIdx::new(0), 0, 0, nodes)]);
        solution
    }

    fn ids(solution: &WorkingSolution) -> Vec<usize> {
        solution
            .route(RouteIdx::new(0))
            .nodes()
            .iter()
            .map(|node| node.get())
            .collect()
    }

    #[test]
    fn test_relocate_forward_and_backward() {
        let problem = test_utils::create_problem(TestProblem {
            num_nodes: 6,
            ..TestProblem::default()
        });

        let mut solution = solution_with(&problem, &[1, 2, 3, 4, 5]);
        let op = RelocateOperator::new(RelocateOperatorParams {
            route_id: RouteIdx::new(0),
            from: 1,
            to: 4,
        });
        let changes = op.route_changes(&solution);
        solution.apply(&problem, &changes);
        assert_eq!(ids(&solution), vec![1, 3, 4, 2, 5]);

        let mut solution = solution_with(&problem, &[1, 2, 3, 4, 5]);
        let op = RelocateOperator::new(RelocateOperatorParams {
            route_id: RouteIdx::new(0),
            from: 4,
            to: 0,
        });
        let changes = op.route_changes(&solution);
        solution.apply(&problem, &changes);
        assert_eq!(ids(&solution), vec![5, 1, 2, 3, 4]);
    }

    #[test]
    fn test_generate_moves_count() {
        let problem = test_utils::create_problem(TestProblem::default());
        let solution = solution_with(&problem, &[1, 2, 3]);

        let mut count = 0;
        RelocateOperator::generate_moves(
            &problem,
            &solution,
            (RouteIdx::new(0), RouteIdx::new(0)),
            |_| count += 1,
        );

        // Each of the 3 stops has 4 slots minus the 2 that leave it in place.
        assert_eq!(count, 6);
    }
}
