//! Compatibility report types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Violations keep traversal order; name lists are sorted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Violation;

/// Options controlling what the differ walks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Compare data sources after resources
    pub include_data_sources: bool,
}

/// Identity digests of both compared snapshots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportIdentity {
    pub baseline_digest: String,
    pub current_digest: String,
}

/// Full result of one compatibility run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompatReport {
    /// Schema version of this report structure (always 1)
    pub report_schema_version: u32,
    pub provider_name: String,
    pub identity: ReportIdentity,
    /// Names of the rules that were evaluated, in order
    pub rules: Vec<String>,
    /// Resource types present in both snapshots
    pub resources_compared: Vec<String>,
    /// Resource types new in the current snapshot, exempt from checks
    pub resources_skipped: Vec<String>,
    /// Data-source types compared (empty unless data sources were included)
    pub data_sources_compared: Vec<String>,
    /// Violations in resource-then-attribute traversal order
    pub violations: Vec<Violation>,
}

impl CompatReport {
    /// True when no rule fired
    pub fn is_compatible(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation counts keyed by rule name
    pub fn violations_by_rule(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for violation in &self.violations {
            *counts.entry(violation.rule.clone()).or_insert(0) += 1;
        }
        counts
    }
}
