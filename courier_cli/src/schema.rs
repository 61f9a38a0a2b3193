use clap::Args;
use courier_optimizer::json::schema::{
    generate_json_schema, generate_reoptimization_json_schema,
};

#[derive(Args)]
pub struct SchemaArgs {
    /// Print the schema of re-optimization requests instead
    #[arg(long)]
    reoptimize: bool,
}

pub fn run(args: SchemaArgs) -> anyhow::Result<()> {
    let schema = if args.reoptimize {
        generate_reoptimization_json_schema()?
    } else {
        generate_json_schema()?
    };

    println!("{schema}");

    Ok(())
}
