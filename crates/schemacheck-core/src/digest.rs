//! Snapshot identity digests
//!
//! A digest is the hex SHA256 of the snapshot's canonical JSON encoding.
//! Every map in the model is a `BTreeMap`, so the encoding (and the digest)
//! does not depend on insertion order.

use crate::errors::Result;
use crate::model::Snapshot;
use sha2::{Digest, Sha256};

/// Compute the identity digest of a snapshot
///
/// ## Errors
///
/// Returns `CompatError::Serialization` if JSON serialization fails.
///
/// ## Example
///
/// ```
/// use schemacheck_core::{digest::snapshot_digest, model::Snapshot};
///
/// let digest = snapshot_digest(&Snapshot::new("acme")).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn snapshot_digest(snapshot: &Snapshot) -> Result<String> {
    let canonical = serde_json::to_string(snapshot)?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
