use crate::problem::node::NodeIdx;

use super::route_id::RouteIdx;

/// Replaces the nodes at positions `start..end` of a route with `nodes`.
///
/// Every move of the search is expressed as one change per touched route, which lets
/// feasibility, cost and arc penalties be evaluated the same way for all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChange {
    pub route_id: RouteIdx,
    pub start: usize,
    pub end: usize,
    pub nodes: Vec<NodeIdx>,
}

impl RouteChange {
    pub fn new(route_id: RouteIdx, start: usize, end: usize, nodes: Vec<NodeIdx>) -> Self {
        debug_assert!(start <= end);
        RouteChange {
            route_id,
            start,
            end,
            nodes,
        }
    }

    pub fn removed_len(&self) -> usize {
        self.end - self.start
    }

    /// Change in the number of served stops.
    pub fn served_delta(&self) -> i64 {
        self.nodes.len() as i64 - self.removed_len() as i64
    }
}
