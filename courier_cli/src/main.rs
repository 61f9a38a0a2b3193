use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    get_matrix::GetMatrixArgs, optimize::OptimizeArgs, reoptimize::ReoptimizeArgs,
    schema::SchemaArgs,
};

mod get_matrix;
mod history_file;
mod optimize;
mod output;
mod parsers;
mod reoptimize;
mod schema;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plans routes for a routing request
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Plans the dropped stops of a previous run again
    Reoptimize {
        #[command(flatten)]
        args: ReoptimizeArgs,
    },
    /// Fetches, and caches, the travel matrix of a routing request
    GetMatrix {
        #[command(flatten)]
        args: GetMatrixArgs,
    },
    /// Prints the JSON schema of the request files
    Schema {
        #[command(flatten)]
        args: SchemaArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args).await?,
        Commands::Reoptimize { args } => reoptimize::run(args).await?,
        Commands::GetMatrix { args } => get_matrix::run(args).await?,
        Commands::Schema { args } => schema::run(args)?,
    }

    Ok(())
}
