use crate::problem::{
    node::{DEPOT, NodeIdx},
    time_dimension::TimeDimension,
    travel_time_matrix::{Cost, Seconds},
    vehicle_routing_problem::VehicleRoutingProblem,
};

/// Summary of a visit sequence that can be concatenated in O(1).
///
/// `duration` is the minimum elapsed time of the sequence (travel, service and waiting),
/// `[earliest, latest]` the range of start times that achieve it, and `time_warp` how much the
/// sequence would have to travel back in time to honour every window. A sequence is
/// window-feasible when `time_warp == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSegment {
    pub first: NodeIdx,
    pub last: NodeIdx,
    pub duration: Seconds,
    pub earliest: Seconds,
    pub latest: Seconds,
    pub time_warp: Seconds,
    /// Sum of transit costs, i.e. travel plus service.
    pub cost: Cost,
}

impl TimeSegment {
    pub fn visit(problem: &VehicleRoutingProblem, node: NodeIdx) -> Self {
        Self::with_service(problem, node, problem.service_duration(node))
    }

    /// The closing depot visit: nothing is served after returning.
    pub fn route_end(problem: &VehicleRoutingProblem) -> Self {
        Self::with_service(problem, DEPOT, 0)
    }

    fn with_service(problem: &VehicleRoutingProblem, node: NodeIdx, service: Seconds) -> Self {
        let window = problem.window_for(node);
        TimeSegment {
            first: node,
            last: node,
            duration: service,
            earliest: window.earliest,
            latest: window.latest,
            time_warp: 0,
            cost: service,
        }
    }

    pub fn concat(&self, problem: &VehicleRoutingProblem, other: &TimeSegment) -> TimeSegment {
        let travel = problem.travel_time(self.last, other.first);
        let delta = self.duration - self.time_warp + travel;
        let delta_wait = (other.earliest - delta - self.latest).max(0);
        let delta_warp = (self.earliest + delta - other.latest).max(0);

        TimeSegment {
            first: self.first,
            last: other.last,
            duration: self.duration + other.duration + travel + delta_wait,
            earliest: (other.earliest - delta).max(self.earliest) - delta_wait,
            latest: (other.latest - delta).min(self.latest) + delta_warp,
            time_warp: self.time_warp + other.time_warp + delta_warp,
            cost: self.cost + other.cost + travel,
        }
    }

    /// Extends the segment with visits to `nodes`, in order.
    pub fn extend<I>(&self, problem: &VehicleRoutingProblem, nodes: I) -> TimeSegment
    where
        I: IntoIterator<Item = NodeIdx>,
    {
        nodes.into_iter().fold(*self, |segment, node| {
            segment.concat(problem, &TimeSegment::visit(problem, node))
        })
    }

    /// Idle time spent waiting for windows to open.
    pub fn waiting(&self) -> Seconds {
        self.duration - self.cost
    }

    pub fn is_feasible(&self, time_dimension: &TimeDimension) -> bool {
        self.time_warp == 0
            && self.duration <= time_dimension.max_duration_secs()
            && self.waiting() <= time_dimension.slack_ceiling_secs()
    }
}
