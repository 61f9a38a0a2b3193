use rand::{Rng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    problem::{node::NodeIdx, vehicle_routing_problem::VehicleRoutingProblem},
    solver::{
        construction::insertion_cache::InsertionCache,
        insertion::{Insertion, ScoredInsertion},
        solution::{
            route::WorkingSolutionRoute, route_id::RouteIdx, working_solution::WorkingSolution,
        },
        time_segment::TimeSegment,
    },
};

/// Cheapest feasible insertion of `node` into `route`, if any.
fn best_route_insertion(
    problem: &VehicleRoutingProblem,
    route: &WorkingSolutionRoute,
    route_id: RouteIdx,
    node: NodeIdx,
) -> Option<ScoredInsertion> {
    let visit = TimeSegment::visit(problem, node);
    let current_cost = route.cost(problem);

    (0..=route.len())
        .filter_map(|position| {
            let segment = route
                .fwd_segment(position)
                .concat(problem, &visit)
                .concat(problem, route.bwd_segment(position));

            segment
                .is_feasible(problem.time_dimension())
                .then_some(ScoredInsertion {
                    insertion: Insertion {
                        node,
                        route_id,
                        position,
                    },
                    cost_delta: segment.cost - current_cost,
                })
        })
        .min_by_key(|scored| scored.cost_delta)
}

/// Builds a first solution by repeatedly applying the globally cheapest feasible insertion.
/// Ties are broken at random. Stops that fit nowhere, or cost more to serve than to skip,
/// stay skipped.
#[instrument(skip_all, level = "debug")]
pub fn construct_solution(problem: &VehicleRoutingProblem, rng: &mut SmallRng) -> WorkingSolution {
    let mut solution = WorkingSolution::new(problem);
    let mut cache = InsertionCache::new();

    loop {
        let skipped: Vec<NodeIdx> = solution.disjunctions().skipped().collect();

        let mut best: Option<ScoredInsertion> = None;
        let mut ties = 0u32;

        for &node in &skipped {
            for route_id in solution.route_ids() {
                let route = solution.route(route_id);

                let candidate = match cache.get(route_id, route.version(), node) {
                    Some(cached) => cached,
                    None => {
                        let computed = best_route_insertion(problem, route, route_id, node);
                        cache.insert(route_id, route.version(), node, computed);
                        computed
                    }
                };

                let Some(candidate) = candidate else {
                    continue;
                };

                match best {
                    Some(current) if candidate.cost_delta > current.cost_delta => {}
                    Some(current) if candidate.cost_delta == current.cost_delta => {
                        ties += 1;
                        if rng.random_range(0..ties) == 0 {
                            best = Some(candidate);
                        }
                    }
                    _ => {
                        best = Some(candidate);
                        ties = 1;
                    }
                }
            }
        }

        match best {
            Some(scored) if scored.cost_delta < problem.skip_penalty() => {
                solution.insert(problem, &scored.insertion);
            }
            _ => break,
        }
    }

    debug!(
        served = problem.num_customers() - solution.disjunctions().skipped_count(),
        skipped = solution.disjunctions().skipped_count(),
        cost = solution.cost(problem),
        "Constructed initial solution"
    );

    solution
}
