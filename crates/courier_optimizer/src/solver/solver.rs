use parking_lot::RwLock;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    error::OptimizerError,
    problem::{node::DEPOT, vehicle_routing_problem::VehicleRoutingProblem},
    solution::{Solution, extract_solution},
    solver::{
        construction::construct_solution::construct_solution,
        ls::guided_local_search::GuidedLocalSearch, search_context::SearchContext,
        solver_params::SolverParams, time_segment::TimeSegment,
    },
    timer_debug,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub enum SolverStatus {
    Unsolved,
    Constructed,
    Improved,
    Terminal,
}

/// One solve of one instance. All search state lives in a [`SearchContext`] created per call,
/// so distinct solvers can run concurrently.
pub struct Solver {
    problem: VehicleRoutingProblem,
    params: SolverParams,
    status: RwLock<SolverStatus>,
}

impl Solver {
    pub fn new(problem: VehicleRoutingProblem, params: SolverParams) -> Self {
        Solver {
            problem,
            params,
            status: RwLock::new(SolverStatus::Unsolved),
        }
    }

    pub fn problem(&self) -> &VehicleRoutingProblem {
        &self.problem
    }

    pub fn status(&self) -> SolverStatus {
        *self.status.read()
    }

    #[instrument(skip_all, level = "debug")]
    pub fn solve(&self) -> Result<Solution, OptimizerError> {
        let problem = &self.problem;
        info!(
            stops = problem.num_customers(),
            vehicles = problem.vehicles().len(),
            time_limit = ?self.params.time_limit(),
            "Start solving"
        );

        // A vehicle that cannot even leave and come back admits no assignment at all.
        let depot_tour = TimeSegment::visit(problem, DEPOT)
            .concat(problem, &TimeSegment::route_end(problem));
        if !depot_tour.is_feasible(problem.time_dimension()) {
            *self.status.write() = SolverStatus::Terminal;
            return Err(OptimizerError::Infeasible);
        }

        let mut context = SearchContext::new(problem, &self.params);

        let initial_solution = timer_debug!(
            "Construction",
            construct_solution(problem, context.rng_mut())
        );
        *self.status.write() = SolverStatus::Constructed;

        let search = GuidedLocalSearch::new(problem, &self.params);
        timer_debug!(
            "Improvement",
            search.run(problem, initial_solution, &mut context)
        );
        *self.status.write() = SolverStatus::Improved;

        let best = context.into_best().ok_or(OptimizerError::Infeasible)?;
        let solution = extract_solution(problem, &best.solution);
        *self.status.write() = SolverStatus::Terminal;

        info!(
            cost = best.cost,
            routes = solution.routes.iter().filter(|route| !route.is_empty()).count(),
            unserved = solution.unserved.len(),
            "Solved"
        );

        Ok(solution)
    }
}
