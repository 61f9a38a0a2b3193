use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use courier_matrix_providers::{cache::FileCache, travel_matrix_client::TravelMatrixClient};
use courier_optimizer::json::types::JsonRoutingRequest;
use tracing::info;

#[derive(Args)]
pub struct GetMatrixArgs {
    /// The routing request whose addresses to look up
    #[arg(short = 'i', long)]
    input: PathBuf,
}

pub async fn run(args: GetMatrixArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let request: JsonRoutingRequest = serde_json::from_reader(BufReader::new(f))?;
    let client = TravelMatrixClient::new(FileCache::from_env().ok());

    let addresses = request.addresses();
    let matrices = client
        .fetch_matrix(&addresses, &request.matrix_provider)
        .await?;

    info!("Fetched travel times between {} addresses", addresses.len());
    println!("{}", serde_json::to_string_pretty(&matrices)?);

    Ok(())
}
