//! schemacheck core - provider schema compatibility checking
//!
//! This crate provides:
//! - The schema model (attribute nodes, trees, snapshots) and its structural validation
//! - An open rule engine with the baseline and opt-in compatibility rules
//! - A deterministic tree differ producing violations and full reports
//! - The error and logging facilities shared by the other workspace crates
//!
//! The core does no I/O apart from reading configuration files.

pub mod config;
pub mod diff;
pub mod digest;
pub mod errors;
pub mod extract;
pub mod logging_facility;
pub mod model;
pub mod rules;

pub use schemacheck_core_types as core_types;

// Re-export commonly used types
pub use config::CheckConfig;
pub use diff::{diff, CompatReport, DiffOptions, Differ};
pub use errors::{CompatError, ExError, ExErrorKind, Result};
pub use extract::{SnapshotProducer, TreeExtractor};
pub use model::{AttributeKind, AttributeNode, AttributePath, AttributeTree, Snapshot, Violation};
pub use rules::{Rule, RuleSet};
