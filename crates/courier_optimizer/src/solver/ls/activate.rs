use crate::{
    problem::{node::NodeIdx, vehicle_routing_problem::VehicleRoutingProblem},
    solver::{
        ls::r#move::LocalSearchOperator,
        solution::{
            route_change::RouteChange, route_id::RouteIdx, working_solution::WorkingSolution,
        },
    },
};

/// Serves a skipped stop by inserting it at `position` of a route.
#[derive(Debug)]
pub struct ActivateOperator {
    params: ActivateOperatorParams,
}

#[derive(Debug)]
pub struct ActivateOperatorParams {
    pub route_id: RouteIdx,
    pub node: NodeIdx,
    pub position: usize,
}

impl ActivateOperator {
    pub fn new(params: ActivateOperatorParams) -> Self {
        Self { params }
    }
}

impl LocalSearchOperator for ActivateOperator {
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
        for node in solution.disjunctions().skipped() {
            for position in 0..=len {
                consumer(ActivateOperator::new(ActivateOperatorParams {
                    route_id: r1,
                    node,
                    position,
                }));
            }
        }
    }

    fn route_changes(&self, _solution: &WorkingSolution) -> Vec<RouteChange> {
        let ActivateOperatorParams {
            route_id,
            node,
            position,
        } = self.params;

        vec![RouteChange::new(route_id, position, position, vec![node])]
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{self, TestProblem};

    use super::*;

    #[test]
    fn test_activate_removes_penalty() {
        let problem = test_utils::create_problem(TestProblem::default());
        let mut solution = WorkingSolution::new(&problem);

        let mut moves = Vec::new();
        ActivateOperator::generate_moves(
            &problem,
            &solution,
            (RouteIdx::new(0), RouteIdx::new(0)),
            |op| moves.push(op),
        );
        assert_eq!(moves.len(), 3);

        let changes = moves[0].route_changes(&solution);
        let evaluation = solution.evaluate(&problem, &changes, None).unwrap();
        assert_eq!(evaluation.cost_delta, 2 * 600 + 300 - problem.skip_penalty());

        solution.apply(&problem, &changes);
        assert_eq!(solution.disjunctions().skipped_count(), 2);
    }
}
