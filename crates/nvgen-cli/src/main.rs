use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nvgen_core::conventions::Conventions;

#[derive(Parser, Debug)]
#[command(name = "nvgen")]
#[command(
    about = "Generate lazily-resolved driver entry point wrappers from a CSV schema.",
    long_about = None
)]
struct Cli {
    /// Schema file: `identifier,name_suffix,param_spec,...` per line, `#` comments.
    schema: PathBuf,
    /// Output prefix (writes <prefix>_gen.cpp and <prefix>_gen.h).
    output_prefix: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nvgen=warn")),
        )
        .init();

    try_main().map_err(|err| {
        eprintln!("{err:#}");
        err
    })
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let paths = nvgen_core::generate(&Conventions::default(), &cli.schema, &cli.output_prefix)?;
    tracing::info!(
        body = %paths.body.display(),
        header = %paths.header.display(),
        "generation complete"
    );
    Ok(())
}
