use tracing::{debug, info, instrument};

use crate::{
    problem::{node::NodeIdx, vehicle_routing_problem::VehicleRoutingProblem},
    solver::{
        ls::{arc_penalties::ArcPenalties, local_search::LocalSearch},
        search_context::SearchContext,
        solution::working_solution::WorkingSolution,
        solver_params::SolverParams,
    },
};

/// Local search escaping its optima by penalizing the arcs with the highest utility
/// `cost / (1 + penalty)` and descending again on the augmented objective.
pub struct GuidedLocalSearch {
    local_search: LocalSearch,
    lambda_factor: f64,
}

impl GuidedLocalSearch {
    pub fn new(problem: &VehicleRoutingProblem, params: &SolverParams) -> Self {
        GuidedLocalSearch {
            local_search: LocalSearch::new(problem, &params.search_threads),
            lambda_factor: params.gls_lambda_factor,
        }
    }

    /// Improves `solution` until a termination is met. Every candidate is offered to the
    /// context, which keeps the best one by real cost.
    #[instrument(skip_all, level = "debug")]
    pub fn run(
        &self,
        problem: &VehicleRoutingProblem,
        solution: WorkingSolution,
        context: &mut SearchContext,
    ) {
        let mut current = solution;
        context.offer(problem, &current);

        let applied = self.local_search.run(problem, &mut current, context, false);
        context.offer(problem, &current);
        debug!(applied, cost = current.cost(problem), "Reached first local optimum");

        let num_arcs = current.num_arcs();
        if num_arcs == 0 || self.lambda_factor <= 0.0 {
            return;
        }

        let lambda = self.lambda_factor * current.routing_cost(problem) as f64 / num_arcs as f64;
        if lambda <= 0.0 {
            return;
        }
        context.set_lambda(lambda);

        while !context.should_terminate() {
            penalize_max_utility_arcs(problem, &current, context.penalties_mut());

            self.local_search.run(problem, &mut current, context, true);

            let improved = context.offer(problem, &current);
            context.record_iteration(improved);
        }

        info!(
            iterations = context.iteration(),
            best_cost = context.best_cost(),
            "Guided local search done"
        );
    }
}

fn penalize_max_utility_arcs(
    problem: &VehicleRoutingProblem,
    solution: &WorkingSolution,
    penalties: &mut ArcPenalties,
) {
    let utility = |(from, to): (NodeIdx, NodeIdx), penalties: &ArcPenalties| {
        problem.transit_cost(from, to) as f64 / (1.0 + penalties.get(from, to) as f64)
    };

    let arcs = || {
        solution
            .routes()
            .iter()
            .flat_map(|route| route.arcs())
            .filter(|(from, to)| from != to)
    };

    let max_utility = arcs()
        .map(|arc| utility(arc, &*penalties))
        .fold(f64::NEG_INFINITY, f64::max);

    if !max_utility.is_finite() {
        return;
    }

    let selected: Vec<(NodeIdx, NodeIdx)> = arcs()
        .filter(|&arc| utility(arc, &*penalties) >= max_utility)
        .collect();

    for (from, to) in selected {
        penalties.increment(from, to);
    }
}
