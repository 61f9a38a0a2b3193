use jiff::Timestamp;
use rand::{SeedableRng, rngs::SmallRng};
use tracing::debug;

use crate::{
    problem::{travel_time_matrix::Cost, vehicle_routing_problem::VehicleRoutingProblem},
    solver::{
        ls::arc_penalties::ArcPenalties,
        solution::working_solution::WorkingSolution,
        solver_params::{SolverParams, Termination},
    },
};

pub struct BestSolution {
    pub solution: WorkingSolution,
    pub cost: Cost,
}

/// Mutable state of one solve: randomness, budget, guided local search penalties and the best
/// solution seen so far. Never shared between solves.
pub struct SearchContext {
    rng: SmallRng,
    started_at: Timestamp,
    terminations: Vec<Termination>,
    iteration: usize,
    iterations_without_improvement: usize,
    penalties: ArcPenalties,
    lambda: f64,
    best: Option<BestSolution>,
}

impl SearchContext {
    pub fn new(problem: &VehicleRoutingProblem, params: &SolverParams) -> Self {
        SearchContext {
            rng: SmallRng::seed_from_u64(params.seed),
            started_at: Timestamp::now(),
            terminations: params.terminations.clone(),
            iteration: 0,
            iterations_without_improvement: 0,
            penalties: ArcPenalties::new(problem.num_nodes()),
            lambda: 0.0,
            best: None,
        }
    }

    pub fn rng_mut(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Only the wall clock can interrupt a local search descent.
    pub fn is_past_deadline(&self) -> bool {
        self.terminations.iter().any(|termination| {
            matches!(termination, Termination::Duration(max_duration)
                if Timestamp::now().duration_since(self.started_at) > *max_duration)
        })
    }

    fn check_termination(&self, termination: &Termination) -> bool {
        match *termination {
            Termination::Duration(max_duration) => {
                Timestamp::now().duration_since(self.started_at) > max_duration
            }
            Termination::Iterations(max_iterations) => self.iteration >= max_iterations,
            Termination::IterationsWithoutImprovement(max_iterations) => {
                self.iterations_without_improvement >= max_iterations
            }
        }
    }

    /// With no termination at all, the search stops at the first local optimum.
    pub fn should_terminate(&self) -> bool {
        if self.terminations.is_empty() {
            return true;
        }

        self.terminations.iter().any(|termination| {
            let met = self.check_termination(termination);
            if met {
                debug!(
                    "Termination condition met: {:?} at iteration {}",
                    termination, self.iteration
                );
            }
            met
        })
    }

    pub fn record_iteration(&mut self, improved: bool) {
        self.iteration += 1;
        if improved {
            self.iterations_without_improvement = 0;
        } else {
            self.iterations_without_improvement += 1;
        }
    }

    pub fn penalties(&self) -> &ArcPenalties {
        &self.penalties
    }

    pub fn penalties_mut(&mut self) -> &mut ArcPenalties {
        &mut self.penalties
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn set_lambda(&mut self, lambda: f64) {
        self.lambda = lambda;
    }

    /// Keeps `solution` if its real cost beats the best one. Returns whether it did.
    pub fn offer(&mut self, problem: &VehicleRoutingProblem, solution: &WorkingSolution) -> bool {
        let cost = solution.cost(problem);

        if let Some(best) = &self.best
            && best.cost <= cost
        {
            return false;
        }

        debug!(cost, iteration = self.iteration, "New best solution");
        self.best = Some(BestSolution {
            solution: solution.clone(),
            cost,
        });

        true
    }

    pub fn best_cost(&self) -> Option<Cost> {
        self.best.as_ref().map(|best| best.cost)
    }

    pub fn into_best(self) -> Option<BestSolution> {
        self.best
    }
}
