use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use courier_matrix_providers::{cache::FileCache, travel_matrix_client::TravelMatrixClient};
use courier_optimizer::{
    history::record_history,
    json::types::JsonRoutingRequest,
    plan::Plan,
    solver::{
        solver::Solver,
        solver_params::{SolverParams, Termination, Threads},
    },
};
use jiff::Timestamp;
use tracing::info;

use crate::{history_file::JsonLinesHistory, output, parsers};

#[derive(Args)]
pub struct OptimizeArgs {
    /// The routing request to plan
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Time budget of the improvement phase (e.g., "10s", "PT1M")
    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "10s")]
    timeout: jiff::SignedDuration,

    #[arg(long, default_value_t = 1)]
    threads: u8,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Who requested the plan, recorded in the history
    #[arg(long, default_value = "cli")]
    actor: String,

    /// JSON-lines file the plan is appended to
    #[arg(long)]
    history: Option<PathBuf>,

    /// Print the plan as JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub fn solver_params(timeout: jiff::SignedDuration, threads: u8, seed: u64) -> SolverParams {
    SolverParams {
        terminations: vec![Termination::Duration(timeout)],
        search_threads: Threads::Multi(threads as usize),
        seed,
        ..SolverParams::default()
    }
}

pub fn publish_plan(
    plan: &Plan,
    actor: &str,
    history: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        output::print_plan(plan);
    }

    if let Some(path) = history {
        record_history(
            &mut JsonLinesHistory::new(path),
            plan,
            actor,
            Timestamp::now(),
        );
    }

    Ok(())
}

pub async fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let request: JsonRoutingRequest = serde_json::from_reader(BufReader::new(f))?;
    let client = TravelMatrixClient::new(FileCache::from_env().ok());
    let problem = request.fetch_problem(&client).await?;

    let solver = Solver::new(problem, solver_params(args.timeout, args.threads, args.seed));
    let solution = solver.solve()?;
    let plan = Plan::new(&solution, &request.stop_infos());

    info!(
        "Finished: routes = {}, stops = {}, unserved = {}",
        plan.routes.len(),
        plan.num_planned_stops(),
        plan.unserved.len()
    );

    publish_plan(&plan, &args.actor, args.history, args.json)
}
