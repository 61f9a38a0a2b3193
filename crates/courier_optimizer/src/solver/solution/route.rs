use crate::{
    problem::{
        node::{DEPOT, NodeIdx},
        travel_time_matrix::Cost,
        vehicle::VehicleIdx,
        vehicle_routing_problem::VehicleRoutingProblem,
    },
    solver::{ls::arc_penalties::ArcPenalties, time_segment::TimeSegment},
};

use super::route_change::RouteChange;

#[derive(Clone, Debug)]
pub struct WorkingSolutionRoute {
    vehicle_id: VehicleIdx,

    /// Visited stops in order, the depot at both ends is implicit.
    nodes: Vec<NodeIdx>,

    /// `fwd_segments[i]` covers the start depot and `nodes[..i]`
    fwd_segments: Vec<TimeSegment>,

    /// `bwd_segments[i]` covers `nodes[i..]` and the end depot
    bwd_segments: Vec<TimeSegment>,

    version: usize,
}

impl WorkingSolutionRoute {
    pub fn empty(problem: &VehicleRoutingProblem, vehicle_id: VehicleIdx) -> Self {
        let mut route = WorkingSolutionRoute {
            vehicle_id,
            nodes: Vec::new(),
            fwd_segments: Vec::new(),
            bwd_segments: Vec::new(),
            version: 0,
        };
        route.update_segments(problem);
        route
    }

    pub fn vehicle_id(&self) -> VehicleIdx {
        self.vehicle_id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn version(&self) -> usize {
        self.version
    }

    pub fn nodes(&self) -> &[NodeIdx] {
        &self.nodes
    }

    pub fn node(&self, position: usize) -> NodeIdx {
        self.nodes[position]
    }

    pub fn nodes_iter(&self, start: usize, end: usize) -> impl DoubleEndedIterator<Item = NodeIdx> + '_ {
        self.nodes[start..end].iter().copied()
    }

    /// Node visited before `position`, the depot for the first stop.
    pub fn previous_node(&self, position: usize) -> NodeIdx {
        if position == 0 {
            DEPOT
        } else {
            self.nodes[position - 1]
        }
    }

    /// Node at `position`, the closing depot past the last stop.
    pub fn node_or_depot(&self, position: usize) -> NodeIdx {
        self.nodes.get(position).copied().unwrap_or(DEPOT)
    }

    pub fn fwd_segment(&self, position: usize) -> &TimeSegment {
        &self.fwd_segments[position]
    }

    pub fn bwd_segment(&self, position: usize) -> &TimeSegment {
        &self.bwd_segments[position]
    }

    /// Whole tour from the start depot back to the end depot.
    pub fn segment(&self, problem: &VehicleRoutingProblem) -> TimeSegment {
        self.fwd_segments[self.nodes.len()].concat(problem, &self.bwd_segments[self.nodes.len()])
    }

    /// Sum of arc costs. An unused vehicle costs nothing.
    pub fn cost(&self, problem: &VehicleRoutingProblem) -> Cost {
        if self.is_empty() {
            0
        } else {
            self.segment(problem).cost
        }
    }

    /// Tour obtained by replacing `start..end` with `nodes`.
    pub fn evaluate_change<I>(
        &self,
        problem: &VehicleRoutingProblem,
        nodes: I,
        start: usize,
        end: usize,
    ) -> TimeSegment
    where
        I: IntoIterator<Item = NodeIdx>,
    {
        self.fwd_segments[start]
            .extend(problem, nodes)
            .concat(problem, &self.bwd_segments[end])
    }

    /// Difference in accumulated arc penalties if `change` were applied.
    pub fn arc_penalty_delta(&self, penalties: &ArcPenalties, change: &RouteChange) -> i64 {
        let before = self.previous_node(change.start);
        let after = self.node_or_depot(change.end);

        let removed = penalties.path_penalty(
            before,
            self.nodes_iter(change.start, change.end),
            after,
        );
        let added = penalties.path_penalty(before, change.nodes.iter().copied(), after);

        added as i64 - removed as i64
    }

    /// Arcs travelled by this route, depot legs included. Empty routes have none.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeIdx, NodeIdx)> + '_ {
        let stops = if self.is_empty() { 0 } else { self.nodes.len() + 1 };

        (0..stops).map(|position| (self.previous_node(position), self.node_or_depot(position)))
    }

    pub fn replace_nodes(
        &mut self,
        problem: &VehicleRoutingProblem,
        nodes: &[NodeIdx],
        start: usize,
        end: usize,
    ) {
        self.nodes.splice(start..end, nodes.iter().copied());
        self.update_segments(problem);
    }

    pub fn insert(&mut self, problem: &VehicleRoutingProblem, position: usize, node: NodeIdx) {
        self.replace_nodes(problem, &[node], position, position);
    }

    fn update_segments(&mut self, problem: &VehicleRoutingProblem) {
        let len = self.nodes.len();

        self.fwd_segments.clear();
        self.fwd_segments.push(TimeSegment::visit(problem, DEPOT));
        for (position, &node) in self.nodes.iter().enumerate() {
            let segment =
                self.fwd_segments[position].concat(problem, &TimeSegment::visit(problem, node));
            self.fwd_segments.push(segment);
        }

        self.bwd_segments.clear();
        self.bwd_segments
            .resize(len + 1, TimeSegment::route_end(problem));
        for position in (0..len).rev() {
            self.bwd_segments[position] = TimeSegment::visit(problem, self.nodes[position])
                .concat(problem, &self.bwd_segments[position + 1]);
        }

        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{self, TestProblem};

    use super::*;

    fn nodes(ids: &[usize]) -> Vec<NodeIdx> {
        ids.iter().copied().map(NodeIdx::new).collect()
    }

    #[test]
    fn test_empty_route() {
        let problem = test_utils::create_problem(TestProblem::default());
        let route = WorkingSolutionRoute::empty(&problem, VehicleIdx::new(0));

        assert!(route.is_empty());
        assert_eq!(route.cost(&problem), 0);
        assert_eq!(route.arcs().count(), 0);
        assert_eq!(route.previous_node(0), DEPOT);
        assert_eq!(route.node_or_depot(0), DEPOT);
    }

    #[test]
    fn test_replace_nodes() {
        let problem = test_utils::create_problem(TestProblem::default());
        let mut route = WorkingSolutionRoute::empty(&problem, VehicleIdx::new(0));

        route.replace_nodes(&problem, &nodes(&[1, 2, 3]), 0, 0);
        assert_eq!(route.nodes(), &nodes(&[1, 2, 3])[..]);
        assert_eq!(route.cost(&problem), 4 * 600 + 3 * 300);

        route.replace_nodes(&problem, &nodes(&[3, 2]), 1, 3);
        assert_eq!(route.nodes(), &nodes(&[1, 3, 2])[..]);

        route.replace_nodes(&problem, &[], 0, 1);
        assert_eq!(route.nodes(), &nodes(&[3, 2])[..]);
        assert_eq!(route.cost(&problem), 3 * 600 + 2 * 300);
        assert_eq!(
            route.arcs().collect::<Vec<_>>(),
            vec![
                (DEPOT, NodeIdx::new(3)),
                (NodeIdx::new(3), NodeIdx::new(2)),
                (NodeIdx::new(2), DEPOT)
            ]
        );
    }

    #[test]
    fn test_evaluate_change_matches_applied_change() {
        let problem = test_utils::create_problem_with_windows(
            test_utils::line_matrix(&[0, 100, 250, 400]),
            vec![test_utils::FULL_DAY; 4],
            vec![0, 30, 30, 30],
        );
        let mut route = WorkingSolutionRoute::empty(&problem, VehicleIdx::new(0));
        route.replace_nodes(&problem, &nodes(&[1, 2, 3]), 0, 0);

        let evaluated = route.evaluate_change(&problem, nodes(&[3, 2]), 1, 3);
        route.replace_nodes(&problem, &nodes(&[3, 2]), 1, 3);

        assert_eq!(evaluated, route.segment(&problem));
    }
}
