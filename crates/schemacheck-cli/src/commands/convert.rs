//! Provider dump conversion command

use std::path::PathBuf;

use clap::Args;
use schemacheck_store::save_snapshot;

use super::{load_input, InputFormat};

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Provider name recorded in the snapshot
    #[arg(long)]
    pub provider_name: String,

    /// Provider schema dump to read
    #[arg(long)]
    pub input: PathBuf,

    /// Native snapshot to write
    #[arg(long)]
    pub output: PathBuf,
}

pub fn execute(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_input(
        &args.input,
        InputFormat::ProviderDump,
        Some(&args.provider_name),
    )?;
    save_snapshot(&args.output, &snapshot)?;

    println!(
        "Wrote snapshot for provider {} ({} resources, {} data sources) to {}",
        snapshot.provider_name,
        snapshot.resources.len(),
        snapshot.data_sources.len(),
        args.output.display()
    );

    Ok(())
}
