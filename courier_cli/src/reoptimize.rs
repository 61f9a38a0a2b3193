use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use courier_matrix_providers::{cache::FileCache, travel_matrix_client::TravelMatrixClient};
use courier_optimizer::{
    json::types::JsonReoptimizationRequest, plan::Plan, reoptimize::reoptimize,
};
use tracing::info;

use crate::{optimize, parsers};

#[derive(Args)]
pub struct ReoptimizeArgs {
    /// The re-optimization request: served stops and dropped addresses
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "10s")]
    timeout: jiff::SignedDuration,

    #[arg(long, default_value_t = 1)]
    threads: u8,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value = "cli")]
    actor: String,

    #[arg(long)]
    history: Option<PathBuf>,

    #[arg(long)]
    json: bool,
}

pub async fn run(args: ReoptimizeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let request: JsonReoptimizationRequest = serde_json::from_reader(BufReader::new(f))?;
    let client = TravelMatrixClient::new(FileCache::from_env().ok());

    let solution = reoptimize(
        &request.to_request(),
        &client,
        &request.matrix_provider,
        optimize::solver_params(args.timeout, args.threads, args.seed),
    )
    .await?;
    let plan = Plan::new(&solution, &request.stop_infos());

    info!(
        "Re-optimized: routes = {}, stops = {}, still unserved = {}",
        plan.routes.len(),
        plan.num_planned_stops(),
        plan.unserved.len()
    );

    optimize::publish_plan(&plan, &args.actor, args.history, args.json)
}
