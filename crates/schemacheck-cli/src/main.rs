//! schemacheck CLI
//!
//! Command-line interface for provider schema compatibility checks

use clap::{Parser, Subcommand};
use schemacheck_core::logging_facility::{init, Profile};

mod commands;

/// Exit code when the check ran and found breaking changes
const EXIT_VIOLATIONS: i32 = 3;

#[derive(Debug, Parser)]
#[command(name = "schemacheck")]
#[command(about = "Detect breaking changes between provider schema snapshots", long_about = None)]
struct Cli {
    /// Human-readable debug logs on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// JSON logs on stderr
    #[arg(long, global = true, conflicts_with = "verbose")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare a baseline snapshot with the current one
    Check(commands::check::CheckArgs),
    /// Summarize a snapshot
    Inspect(commands::inspect::InspectArgs),
    /// Convert a provider schema dump into a native snapshot
    Convert(commands::convert::ConvertArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        init(Profile::Production);
    } else if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args).map(|compatible| {
            if compatible {
                0
            } else {
                EXIT_VIOLATIONS
            }
        }),
        Commands::Inspect(args) => commands::inspect::execute(args).map(|()| 0),
        Commands::Convert(args) => commands::convert::execute(args).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
