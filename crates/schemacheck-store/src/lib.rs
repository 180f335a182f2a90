//! schemacheck store - snapshot persistence and import
//!
//! Provides:
//! - The native JSON snapshot document, loaded and saved with atomic writes
//! - Import of the provider's JSON schema dump into a snapshot

pub mod atomic;
pub mod errors;
pub mod provider_dump;
pub mod snapshot_file;

// Re-export key types
pub use errors::Result;
pub use provider_dump::{import_provider_dump, ProviderDumpExtractor};
pub use snapshot_file::{
    load_snapshot, parse_snapshot_bytes, save_snapshot, to_snapshot_bytes, JsonSnapshotFile,
    SNAPSHOT_FORMAT_VERSION,
};
