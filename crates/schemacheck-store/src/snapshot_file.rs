//! Native snapshot document
//!
//! ```json
//! {
//!   "snapshot_format_version": 1,
//!   "provider_name": "acme",
//!   "resources": { "acme_widget": { "attributes": { ... } } },
//!   "data_sources": {}
//! }
//! ```
//!
//! Documents are written pretty-printed with a trailing newline. Every map
//! is ordered, so saving a loaded document reproduces it byte for byte.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use schemacheck_core::errors::{CompatError, ExError};
use schemacheck_core::model::{validate_snapshot, AttributeTree, Snapshot};
use schemacheck_core::{log_op_end, log_op_error, log_op_start, SnapshotProducer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::atomic::atomic_write;
use crate::errors::{from_compat, invalid_snapshot, io_error, serialization_error, Result};

/// The only document version this build reads and writes
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

const VERSION_KEY: &str = "snapshot_format_version";

#[derive(Serialize)]
struct DocumentRef<'a> {
    snapshot_format_version: u32,
    provider_name: &'a str,
    resources: &'a BTreeMap<String, AttributeTree>,
    data_sources: &'a BTreeMap<String, AttributeTree>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    #[allow(dead_code)]
    snapshot_format_version: u32,
    provider_name: String,
    #[serde(default)]
    resources: BTreeMap<String, AttributeTree>,
    #[serde(default)]
    data_sources: BTreeMap<String, AttributeTree>,
}

/// Parse and validate a native snapshot document
///
/// # Errors
///
/// - `InvalidSnapshot`: not UTF-8 JSON, not an object, missing or
///   malformed fields, or a structural defect found by validation
/// - `UnsupportedFormat`: `snapshot_format_version` is not 1
pub fn parse_snapshot_bytes(bytes: &[u8]) -> Result<Snapshot> {
    const OP: &str = "parse_snapshot_bytes";

    let raw: Value = serde_json::from_slice(bytes)
        .map_err(|e| invalid_snapshot(OP, format!("snapshot is not valid JSON: {}", e)))?;

    let obj = raw
        .as_object()
        .ok_or_else(|| invalid_snapshot(OP, "snapshot JSON root must be an object"))?;

    let version = obj
        .get(VERSION_KEY)
        .ok_or_else(|| invalid_snapshot(OP, format!("required field `{}` is absent", VERSION_KEY)))?;
    let version = version
        .as_u64()
        .ok_or_else(|| {
            invalid_snapshot(
                OP,
                format!("`{}` must be an unsigned integer, got: {}", VERSION_KEY, version),
            )
        })?;
    if version != u64::from(SNAPSHOT_FORMAT_VERSION) {
        return Err(from_compat(
            OP,
            CompatError::UnsupportedFormat {
                found: u32::try_from(version).unwrap_or(u32::MAX),
                supported: SNAPSHOT_FORMAT_VERSION,
            },
        ));
    }

    let document: Document = serde_json::from_value(raw)
        .map_err(|e| invalid_snapshot(OP, format!("failed to deserialize snapshot: {}", e)))?;

    let snapshot = Snapshot {
        provider_name: document.provider_name,
        resources: document.resources,
        data_sources: document.data_sources,
    };
    validate_snapshot(&snapshot).map_err(|e| from_compat(OP, e))?;

    Ok(snapshot)
}

/// Encode a snapshot as a native document
///
/// # Errors
///
/// `InvalidSnapshot` if the snapshot fails validation, `Serialization` if
/// encoding fails.
pub fn to_snapshot_bytes(snapshot: &Snapshot) -> Result<Vec<u8>> {
    const OP: &str = "to_snapshot_bytes";

    validate_snapshot(snapshot).map_err(|e| from_compat(OP, e))?;

    let document = DocumentRef {
        snapshot_format_version: SNAPSHOT_FORMAT_VERSION,
        provider_name: &snapshot.provider_name,
        resources: &snapshot.resources,
        data_sources: &snapshot.data_sources,
    };
    let mut bytes =
        serde_json::to_vec_pretty(&document).map_err(|e| serialization_error(OP, e))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Read a native snapshot file
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`parse_snapshot_bytes`].
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    log_op_start!("load_snapshot", path = %path.display());
    let start = Instant::now();

    let result = std::fs::read(path)
        .map_err(|e| io_error("load_snapshot", e).with_path(path.display().to_string()))
        .and_then(|bytes| parse_snapshot_bytes(&bytes));

    match result {
        Ok(snapshot) => {
            log_op_end!(
                "load_snapshot",
                duration_ms = start.elapsed().as_millis() as u64,
                provider = %snapshot.provider_name,
                resource_count = snapshot.resources.len() as u64
            );
            Ok(snapshot)
        }
        Err(e) => {
            log_op_error!(
                "load_snapshot",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

/// Write a snapshot atomically as a native document
///
/// # Errors
///
/// As [`to_snapshot_bytes`], plus `Io` if the file cannot be written.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    log_op_start!("save_snapshot", path = %path.display());
    let start = Instant::now();

    let result = to_snapshot_bytes(snapshot).and_then(|bytes| atomic_write(path, &bytes));

    match &result {
        Ok(()) => {
            log_op_end!(
                "save_snapshot",
                duration_ms = start.elapsed().as_millis() as u64,
                provider = %snapshot.provider_name
            );
        }
        Err(e) => {
            log_op_error!(
                "save_snapshot",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }

    result
}

/// Stored snapshot producer backed by a native document on disk
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotProducer for JsonSnapshotFile {
    fn produce(&self) -> std::result::Result<Snapshot, ExError> {
        load_snapshot(&self.path)
    }
}
