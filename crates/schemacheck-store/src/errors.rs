//! Error handling for schemacheck-store
//!
//! Wraps schemacheck-core ExError with store-specific helpers

use schemacheck_core::errors::{CompatError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an invalid-snapshot error for a document that cannot be read
pub fn invalid_snapshot(operation: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidSnapshot)
        .with_op(operation.to_string())
        .with_message(reason)
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Convert a core error, attaching the store operation it surfaced in
pub fn from_compat(operation: &str, err: CompatError) -> ExError {
    ExError::from(err).with_op(operation.to_string())
}
