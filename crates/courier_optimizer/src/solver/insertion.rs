use crate::{
    problem::{node::NodeIdx, travel_time_matrix::Cost},
    solver::solution::{route_change::RouteChange, route_id::RouteIdx},
};

/// Puts `node` at `position` of `route_id`, shifting later stops back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    pub node: NodeIdx,
    pub route_id: RouteIdx,
    pub position: usize,
}

impl Insertion {
    pub fn route_change(&self) -> RouteChange {
        RouteChange::new(self.route_id, self.position, self.position, vec![self.node])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredInsertion {
    pub insertion: Insertion,
    pub cost_delta: Cost,
}
