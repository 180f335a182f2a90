//! Compatibility check command

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use schemacheck_core::config::CheckConfig;
use schemacheck_core::diff::{render_human_summary, Differ};
use schemacheck_core::errors::ExError;

use super::{load_input, InputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown summary
    Text,
    /// Full report as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Released snapshot
    #[arg(long)]
    pub baseline: PathBuf,

    /// Snapshot under review
    #[arg(long)]
    pub current: PathBuf,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also compare data sources
    #[arg(long)]
    pub include_data_sources: bool,

    /// Enable the opt-in rules
    #[arg(long)]
    pub extended: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[arg(long, value_enum, default_value_t = InputFormat::Native)]
    pub input_format: InputFormat,

    /// Provider name for schema dump inputs
    #[arg(long)]
    pub provider_name: Option<String>,
}

/// Run the check; `Ok(true)` means no violations
pub fn execute(args: CheckArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => CheckConfig::load(path).map_err(ExError::from)?,
        None => CheckConfig::default(),
    };
    if args.include_data_sources {
        config.include_data_sources = true;
    }
    if args.extended {
        config.rules.extended = true;
    }
    let rules = config.rule_set().map_err(ExError::from)?;

    let provider_name = args.provider_name.as_deref();
    let baseline = load_input(&args.baseline, args.input_format, provider_name)?;
    let current = load_input(&args.current, args.input_format, provider_name)?;

    let report = Differ::new(&rules)
        .with_options(config.diff_options())
        .run(&baseline, &current)
        .map_err(ExError::from)?;

    match args.output {
        OutputFormat::Text => print!("{}", render_human_summary(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(report.is_compatible())
}
