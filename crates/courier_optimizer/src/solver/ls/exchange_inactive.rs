use crate::{
    problem::{node::NodeIdx, vehicle_routing_problem::VehicleRoutingProblem},
    solver::{
        ls::r#move::LocalSearchOperator,
        solution::{
            route_change::RouteChange, route_id::RouteIdx, working_solution::WorkingSolution,
        },
    },
};

/// Skips the stop at `position` and serves the skipped `node` in its place. The number of
/// served stops is unchanged, so only arc costs decide.
#[derive(Debug)]
pub struct ExchangeInactiveOperator {
    params: ExchangeInactiveOperatorParams,
}

#[derive(Debug)]
pub struct ExchangeInactiveOperatorParams {
    pub route_id: RouteIdx,
    pub position: usize,
    pub node: NodeIdx,
}

impl ExchangeInactiveOperator {
    pub fn new(params: ExchangeInactiveOperatorParams) -> Self {
        Self { params }
    }
}

impl LocalSearchOperator for ExchangeInactiveOperator {
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
            for position in 0..len {
                consumer(ExchangeInactiveOperator::new(
                    ExchangeInactiveOperatorParams {
                        route_id: r1,
                        position,
                        node,
                    },
                ));
            }
        }
    }

    fn route_changes(&self, _solution: &WorkingSolution) -> Vec<RouteChange> {
        let ExchangeInactiveOperatorParams {
            route_id,
            position,
            node,
        } = self.params;

        vec![RouteChange::new(route_id, position, position + 1, vec![node])]
    }
}

#[cfg(test)]
mod tests {
    use crate::{problem::time_window::TimeWindow, solver::disjunction::Visit, test_utils};

    use super::*;

    #[test]
    fn test_exchange_for_closer_stop() {
        let problem = test_utils::create_problem_with_windows(
            test_utils::line_matrix(&[0, 1_000, 100]),
            vec![TimeWindow::new(0, 10_000); 3],
            vec![0, 0, 0],
        );
        let mut solution = WorkingSolution::new(&problem);
        solution.apply(
            &problem,
            &[RouteChange::new(RouteIdx::new(0), 0, 0, vec![NodeIdx::new(1)])],
        );

        let op = ExchangeInactiveOperator::new(ExchangeInactiveOperatorParams {
            route_id: RouteIdx::new(0),
            position: 0,
            node: NodeIdx::new(2),
        });
        let changes = op.route_changes(&solution);
        let evaluation = solution.evaluate(&problem, &changes, None).unwrap();
        assert_eq!(evaluation.cost_delta, 200 - 2_000);

        solution.apply(&problem, &changes);
        assert_eq!(solution.disjunctions().outcome(NodeIdx::new(1)), Visit::Skipped);
        assert!(!solution.disjunctions().outcome(NodeIdx::new(2)).is_skipped());
    }
}
