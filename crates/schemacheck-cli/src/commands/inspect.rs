//! Snapshot inspection command

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use schemacheck_core::digest::snapshot_digest;
use schemacheck_core::errors::ExError;
use schemacheck_core::model::AttributeTree;

use super::{load_input, InputFormat};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Snapshot to inspect
    pub file: PathBuf,

    #[arg(long, value_enum, default_value_t = InputFormat::Native)]
    pub input_format: InputFormat,

    /// Provider name for schema dump inputs
    #[arg(long)]
    pub provider_name: Option<String>,
}

fn print_section(title: &str, trees: &BTreeMap<String, AttributeTree>) {
    println!("{}: {}", title, trees.len());
    for (name, tree) in trees {
        println!("  {}  {} attributes", name, tree.attribute_count_recursive());
    }
}

pub fn execute(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = load_input(&args.file, args.input_format, args.provider_name.as_deref())?;
    let digest = snapshot_digest(&snapshot).map_err(ExError::from)?;

    println!("provider: {}", snapshot.provider_name);
    println!("digest: {}", digest);
    print_section("resources", &snapshot.resources);
    print_section("data sources", &snapshot.data_sources);

    Ok(())
}
