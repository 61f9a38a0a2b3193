use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, instrument, warn};

use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        ls::{
            activate::ActivateOperator,
            arc_penalties::ArcPenalties,
            deactivate::DeactivateOperator,
            exchange_inactive::ExchangeInactiveOperator,
            inter_relocate::InterRelocateOperator,
            inter_swap::InterSwapOperator,
            r#move::{LocalSearchMove, LocalSearchOperator},
            relocate::RelocateOperator,
            swap::SwapOperator,
            two_opt::TwoOptOperator,
        },
        search_context::SearchContext,
        solution::{
            route_change::RouteChange,
            route_id::RouteIdx,
            working_solution::{MoveEvaluation, WorkingSolution},
        },
        solver_params::Threads,
    },
};

type RoutePair = (RouteIdx, RouteIdx);

/// Moves must improve the objective by more than this to be applied.
const MIN_IMPROVEMENT: f64 = 1e-6;

struct CandidateMove {
    op: LocalSearchMove,
    changes: Vec<RouteChange>,
    evaluation: MoveEvaluation,
    delta: f64,
}

/// Best-improvement descent over every operator and every pair of routes.
pub struct LocalSearch {
    pairs: Vec<RoutePair>,
    thread_pool: Option<rayon::ThreadPool>,
}

impl LocalSearch {
    pub fn new(problem: &VehicleRoutingProblem, threads: &Threads) -> Self {
        let count = problem.vehicles().len();
        let pairs = (0..count)
            .flat_map(|r1| (0..count).map(move |r2| (RouteIdx::new(r1), RouteIdx::new(r2))))
            .collect();

        let num_threads = threads.number_of_threads();
        let thread_pool = if num_threads > 1 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
            {
                Ok(pool) => Some(pool),
                Err(err) => {
                    warn!("Could not create search thread pool, searching on one thread: {err}");
                    None
                }
            }
        } else {
            None
        };

        LocalSearch { pairs, thread_pool }
    }

    /// Descends until no move improves the objective or the time budget runs out. When
    /// `guided` is set, arc penalties from the context augment the objective.
    /// Returns the number of applied moves.
    #[instrument(skip_all, level = "debug")]
    pub fn run(
        &self,
        problem: &VehicleRoutingProblem,
        solution: &mut WorkingSolution,
        context: &SearchContext,
        guided: bool,
    ) -> usize {
        let (penalties, lambda) = if guided {
            (Some(context.penalties()), context.lambda())
        } else {
            (None, 0.0)
        };

        let mut applied = 0;
        while !context.is_past_deadline() {
            let Some(candidate) = self.find_best_move(problem, solution, penalties, lambda) else {
                break;
            };

            debug!(
                "Apply {} (d={}, cost d={})",
                candidate.op.operator_name(),
                candidate.delta,
                candidate.evaluation.cost_delta
            );

            solution.apply(problem, &candidate.changes);
            applied += 1;
        }

        applied
    }

    fn find_best_move(
        &self,
        problem: &VehicleRoutingProblem,
        solution: &WorkingSolution,
        penalties: Option<&ArcPenalties>,
        lambda: f64,
    ) -> Option<CandidateMove> {
        let evaluate_pair =
            |&pair: &RoutePair| best_move_for_pair(problem, solution, pair, penalties, lambda);

        let results: Vec<Option<CandidateMove>> = match &self.thread_pool {
            Some(pool) => pool.install(|| self.pairs.par_iter().map(evaluate_pair).collect()),
            None => self.pairs.iter().map(evaluate_pair).collect(),
        };

        results
            .into_iter()
            .flatten()
            .fold(None, |best: Option<CandidateMove>, candidate| match best {
                Some(best) if best.delta <= candidate.delta => Some(best),
                _ => Some(candidate),
            })
    }
}

fn best_move_for_pair(
    problem: &VehicleRoutingProblem,
    solution: &WorkingSolution,
    pair: RoutePair,
    penalties: Option<&ArcPenalties>,
    lambda: f64,
) -> Option<CandidateMove> {
    let mut best: Option<CandidateMove> = None;

    let mut consider = |op: LocalSearchMove| {
        let changes = op.route_changes(solution);
        let Some(evaluation) = solution.evaluate(problem, &changes, penalties) else {
            return;
        };

        let delta = evaluation.augmented_delta(lambda);
        let best_delta = best.as_ref().map_or(-MIN_IMPROVEMENT, |best| best.delta);

        if delta < best_delta {
            best = Some(CandidateMove {
                op,
                changes,
                evaluation,
                delta,
            });
        }
    };

    RelocateOperator::generate_moves(problem, solution, pair, |op| {
        consider(LocalSearchMove::Relocate(op))
    });
    SwapOperator::generate_moves(problem, solution, pair, |op| {
        consider(LocalSearchMove::Swap(op))
    });
    TwoOptOperator::generate_moves(problem, solution, pair, |op| {
        consider(LocalSearchMove::TwoOpt(op))
    });
    InterRelocateOperator::generate_moves(problem, solution, pair, |op| {
        consider(LocalSearchMove::InterRelocate(op))
    });
    InterSwapOperator::generate_moves(problem, solution, pair, |op| {
        consider(LocalSearchMove::InterSwap(op))
    });
    ActivateOperator::generate_moves(problem, solution, pair, |op| {
        consider(LocalSearchMove::Activate(op))
    });
    ExchangeInactiveOperator::generate_moves(problem, solution, pair, |op| {
        consider(LocalSearchMove::ExchangeInactive(op))
    });
    DeactivateOperator::generate_moves(problem, solution, pair, |op| {
        consider(LocalSearchMove::Deactivate(op))
    });

    best
}
