pub mod check;
pub mod convert;
pub mod inspect;

use std::path::Path;

use clap::ValueEnum;
use schemacheck_core::errors::{ExError, ExErrorKind};
use schemacheck_core::model::Snapshot;
use schemacheck_store::{import_provider_dump, load_snapshot};

/// On-disk representation of an input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Native snapshot document
    Native,
    /// Provider schema dump (needs --provider-name)
    ProviderDump,
}

/// Load a snapshot in either input format
pub fn load_input(
    path: &Path,
    format: InputFormat,
    provider_name: Option<&str>,
) -> Result<Snapshot, ExError> {
    match format {
        InputFormat::Native => load_snapshot(path),
        InputFormat::ProviderDump => {
            let provider_name = provider_name.ok_or_else(|| {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_message("--provider-name is required with --input-format provider-dump")
            })?;
            let bytes = std::fs::read(path).map_err(|e| {
                ExError::new(ExErrorKind::Io)
                    .with_op("read_provider_dump")
                    .with_path(path.display().to_string())
                    .with_message(e.to_string())
            })?;
            import_provider_dump(provider_name, &bytes)
        }
    }
}
