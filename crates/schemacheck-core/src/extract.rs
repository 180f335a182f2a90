//! Producer seams
//!
//! Building a snapshot from a running provider is outside this crate. These
//! traits are the narrow interface such producers implement.

use crate::errors::{ExError, Result};
use crate::model::{AttributeTree, Snapshot};

/// Turns one resource's schema, in some source representation, into a tree
pub trait TreeExtractor<S: ?Sized> {
    /// # Errors
    ///
    /// Returns `CompatError::InvalidSnapshot` when the source cannot be mapped
    /// onto the attribute model.
    fn extract_tree(&self, source: &S) -> Result<AttributeTree>;
}

/// Produces a complete snapshot
///
/// Producers sit at the I/O boundary, so they report the canonical
/// [`ExError`] rather than the core taxonomy.
pub trait SnapshotProducer {
    /// # Errors
    ///
    /// Implementation specific; stored producers report I/O and format errors.
    fn produce(&self) -> std::result::Result<Snapshot, ExError>;
}
