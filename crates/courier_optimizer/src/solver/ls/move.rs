use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        ls::{
            activate::ActivateOperator, deactivate::DeactivateOperator,
            exchange_inactive::ExchangeInactiveOperator, inter_relocate::InterRelocateOperator,
            inter_swap::InterSwapOperator, relocate::RelocateOperator, swap::SwapOperator,
            two_opt::TwoOptOperator,
        },
        solution::{
            route_change::RouteChange, route_id::RouteIdx, working_solution::WorkingSolution,
        },
    },
};

pub trait LocalSearchOperator: Sized {
    /// Calls `consumer` with every move of this neighbourhood touching the routes `r1` and `r2`.
    /// Intra-route operators only generate moves when `r1 == r2`.
    fn generate_moves<C>(
        problem: &VehicleRoutingProblem,
        solution: &WorkingSolution,
        routes: (RouteIdx, RouteIdx),
        consumer: C,
    ) where
        C: FnMut(Self);

    /// The move as one replacement per touched route.
    fn route_changes(&self, solution: &WorkingSolution) -> Vec<RouteChange>;
}

#[derive(Debug)]
pub enum LocalSearchMove {
    /// Moves a stop to another position of its route.
    Relocate(RelocateOperator),
    /// Exchanges two stops of the same route.
    Swap(SwapOperator),
    /// Reverses a run of stops of one route.
    TwoOpt(TwoOptOperator),
    /// Moves a stop to another route.
    InterRelocate(InterRelocateOperator),
    /// Exchanges two stops between routes.
    InterSwap(InterSwapOperator),
    /// Serves a skipped stop.
    Activate(ActivateOperator),
    /// Skips a served stop.
    Deactivate(DeactivateOperator),
    /// Serves a skipped stop in place of a served one.
    ExchangeInactive(ExchangeInactiveOperator),
}

impl LocalSearchMove {
    pub fn operator_name(&self) -> &'static str {
        match self {
            LocalSearchMove::Relocate(_) => "Relocate",
            LocalSearchMove::Swap(_) => "Swap",
            LocalSearchMove::TwoOpt(_) => "Two-Opt",
            LocalSearchMove::InterRelocate(_) => "Inter-Relocate",
            LocalSearchMove::InterSwap(_) => "Inter-Swap",
            LocalSearchMove::Activate(_) => "Activate",
            LocalSearchMove::Deactivate(_) => "Deactivate",
            LocalSearchMove::ExchangeInactive(_) => "Exchange-Inactive",
        }
    }

    pub fn route_changes(&self, solution: &WorkingSolution) -> Vec<RouteChange> {
        match self {
            LocalSearchMove::Relocate(op) => op.route_changes(solution),
            LocalSearchMove::Swap(op) => op.route_changes(solution),
            LocalSearchMove::TwoOpt(op) => op.route_changes(solution),
            LocalSearchMove::InterRelocate(op) => op.route_changes(solution),
            LocalSearchMove::InterSwap(op) => op.route_changes(solution),
            LocalSearchMove::Activate(op) => op.route_changes(solution),
            LocalSearchMove::Deactivate(op) => op.route_changes(solution),
            LocalSearchMove::ExchangeInactive(op) => op.route_changes(solution),
        }
    }
}
