use crate::{
    problem::{node::NodeIdx, travel_time_matrix::Cost, vehicle_routing_problem::VehicleRoutingProblem},
    solver::solution::route_id::RouteIdx,
};

/// Outcome of an optional stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Visited { route_id: RouteIdx, position: usize },
    Skipped,
}

impl Visit {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Visit::Skipped)
    }
}

/// One `Visit` per non-depot node plus the cost of skipping one.
#[derive(Debug, Clone)]
pub struct Disjunctions {
    outcomes: Vec<Visit>,
    skipped_count: usize,
    penalty: Cost,
}

impl Disjunctions {
    /// Every stop starts out skipped.
    pub fn new(problem: &VehicleRoutingProblem) -> Self {
        Disjunctions {
            outcomes: vec![Visit::Skipped; problem.num_customers()],
            skipped_count: problem.num_customers(),
            penalty: problem.skip_penalty(),
        }
    }

    #[inline(always)]
    fn slot(node: NodeIdx) -> usize {
        debug_assert!(!node.is_depot(), "the depot has no disjunction");
        node.get() - 1
    }

    pub fn outcome(&self, node: NodeIdx) -> Visit {
        self.outcomes[Self::slot(node)]
    }

    pub fn set_visited(&mut self, node: NodeIdx, route_id: RouteIdx, position: usize) {
        let slot = Self::slot(node);
        if self.outcomes[slot].is_skipped() {
            self.skipped_count -= 1;
        }
        self.outcomes[slot] = Visit::Visited { route_id, position };
    }

    pub fn set_skipped(&mut self, node: NodeIdx) {
        let slot = Self::slot(node);
        if !self.outcomes[slot].is_skipped() {
            self.skipped_count += 1;
        }
        self.outcomes[slot] = Visit::Skipped;
    }

    pub fn skipped(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, outcome)| outcome.is_skipped())
            .map(|(slot, _)| NodeIdx::new(slot + 1))
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }

    pub fn penalty(&self) -> Cost {
        self.penalty
    }

    pub fn total_penalty(&self) -> Cost {
        self.skipped_count as Cost * self.penalty
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{self, TestProblem};

    use super::*;

    #[test]
    fn test_outcomes() {
        let problem = test_utils::create_problem(TestProblem::default());
        let mut disjunctions = Disjunctions::new(&problem);

        assert_eq!(disjunctions.skipped_count(), 3);
        assert_eq!(disjunctions.total_penalty(), 3 * problem.skip_penalty());

        disjunctions.set_visited(NodeIdx::new(2), RouteIdx::new(0), 0);
        disjunctions.set_visited(NodeIdx::new(2), RouteIdx::new(0), 1);
        assert_eq!(disjunctions.skipped_count(), 2);
        assert_eq!(
            disjunctions.outcome(NodeIdx::new(2)),
            Visit::Visited {
                route_id: RouteIdx::new(0),
                position: 1
            }
        );
        assert_eq!(
            disjunctions.skipped().collect::<Vec<_>>(),
            vec![NodeIdx::new(1), NodeIdx::new(3)]
        );

        disjunctions.set_skipped(NodeIdx::new(2));
        disjunctions.set_skipped(NodeIdx::new(2));
        assert_eq!(disjunctions.skipped_count(), 3);
    }
}
