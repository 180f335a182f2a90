//! Schema tree differ.
//!
//! Walks a baseline and a current snapshot in lock-step and runs a
//! [`RuleSet`](crate::rules::RuleSet) at every attribute present in both.
//!
//! ## Entry point
//!
//! ```
//! use schemacheck_core::diff::{diff, render_human_summary, Differ};
//! use schemacheck_core::model::Snapshot;
//! use schemacheck_core::rules::RuleSet;
//!
//! let baseline = Snapshot::new("acme");
//! let current = Snapshot::new("acme");
//! assert!(diff(&baseline, &current).unwrap().is_empty());
//!
//! let rules = RuleSet::baseline();
//! let report = Differ::new(&rules).run(&baseline, &current).unwrap();
//! let summary = render_human_summary(&report);
//! assert!(summary.contains("Compatible"));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical, identically ordered output.
//! - **Reflexivity**: a snapshot compared with itself yields no violations.
//! - **New-resource exemption**: resources absent from the baseline are skipped.
//! - **Single fatal condition**: differing provider names abort before any traversal.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compare_node, compare_tree, diff, Differ};
pub use human_summary::render_human_summary;
pub use model::{CompatReport, DiffOptions, ReportIdentity};
