//! Lock-step walk of two snapshots.
//!
//! Resources are visited in name order, attributes in name order within each
//! tree, and nested blocks are walked before the rules run on the block
//! attribute itself. Only names present on both sides are compared.

use std::time::Instant;

use crate::diff::model::{CompatReport, DiffOptions, ReportIdentity};
use crate::digest::snapshot_digest;
use crate::errors::{CompatError, Result};
use crate::model::{AttributeNode, AttributePath, AttributeTree, Snapshot, Violation};
use crate::rules::RuleSet;
use crate::{log_op_end, log_op_error, log_op_start};

/// Compare two snapshots with the baseline rule catalog
///
/// # Errors
///
/// `CompatError::ProviderMismatch` if the snapshots describe different
/// providers. Nothing is compared in that case.
pub fn diff(baseline: &Snapshot, current: &Snapshot) -> Result<Vec<Violation>> {
    Differ::new(&RuleSet::baseline()).diff(baseline, current)
}

/// Compare one attribute pair, appending violations to `out`
///
/// When both sides are blocks the nested attributes are compared first.
pub fn compare_node(
    rules: &RuleSet,
    base: &AttributeNode,
    current: &AttributeNode,
    path: &AttributePath,
    out: &mut Vec<Violation>,
) {
    if let (Some(base_tree), Some(current_tree)) = (nested_block(base), nested_block(current)) {
        compare_tree(rules, base_tree, current_tree, path, out);
    }
    out.extend(rules.apply_all(base, current, path));
}

/// Compare every attribute present in both trees
pub fn compare_tree(
    rules: &RuleSet,
    base: &AttributeTree,
    current: &AttributeTree,
    path: &AttributePath,
    out: &mut Vec<Violation>,
) {
    for (name, current_node) in &current.attributes {
        if let Some(base_node) = base.get(name) {
            compare_node(rules, base_node, current_node, &path.child(name), out);
        }
    }
}

fn nested_block(node: &AttributeNode) -> Option<&AttributeTree> {
    if node.is_block() {
        node.nested()
    } else {
        None
    }
}

fn log_violations(violations: &[Violation]) {
    for violation in violations {
        tracing::debug!(
            attribute_path = %violation.path,
            rule = %violation.rule,
            "violation"
        );
    }
}

#[derive(Default)]
struct Traversal {
    resources_compared: Vec<String>,
    resources_skipped: Vec<String>,
    data_sources_compared: Vec<String>,
    violations: Vec<Violation>,
}

/// Configured differ: a rule set plus walk options
pub struct Differ<'r> {
    rules: &'r RuleSet,
    options: DiffOptions,
}

impl<'r> Differ<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rules,
            options: DiffOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    /// Compare two snapshots and return the violations
    ///
    /// # Errors
    ///
    /// `CompatError::ProviderMismatch` if the provider names differ.
    pub fn diff(&self, baseline: &Snapshot, current: &Snapshot) -> Result<Vec<Violation>> {
        Ok(self.traverse_logged(baseline, current)?.violations)
    }

    /// Compare two snapshots and build a full report
    ///
    /// # Errors
    ///
    /// `CompatError::ProviderMismatch` if the provider names differ, or
    /// `CompatError::Serialization` if a snapshot digest cannot be computed.
    pub fn run(&self, baseline: &Snapshot, current: &Snapshot) -> Result<CompatReport> {
        let traversal = self.traverse_logged(baseline, current)?;
        Ok(CompatReport {
            report_schema_version: 1,
            provider_name: current.provider_name.clone(),
            identity: ReportIdentity {
                baseline_digest: snapshot_digest(baseline)?,
                current_digest: snapshot_digest(current)?,
            },
            rules: self.rules.names().into_iter().map(String::from).collect(),
            resources_compared: traversal.resources_compared,
            resources_skipped: traversal.resources_skipped,
            data_sources_compared: traversal.data_sources_compared,
            violations: traversal.violations,
        })
    }

    fn traverse_logged(&self, baseline: &Snapshot, current: &Snapshot) -> Result<Traversal> {
        log_op_start!("diff", provider = %current.provider_name);
        let start = Instant::now();

        let traversal = self.traverse(baseline, current).map_err(|e| {
            log_op_error!(
                "diff",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                provider = %current.provider_name
            );
            e
        })?;

        log_op_end!(
            "diff",
            duration_ms = start.elapsed().as_millis() as u64,
            provider = %current.provider_name,
            violations = traversal.violations.len() as u64,
            resource_count = traversal.resources_compared.len() as u64
        );

        Ok(traversal)
    }

    fn traverse(&self, baseline: &Snapshot, current: &Snapshot) -> Result<Traversal> {
        if baseline.provider_name != current.provider_name {
            return Err(CompatError::ProviderMismatch {
                baseline: baseline.provider_name.clone(),
                current: current.provider_name.clone(),
            });
        }

        let mut traversal = Traversal::default();

        for (name, current_tree) in &current.resources {
            let Some(base_tree) = baseline.resources.get(name) else {
                tracing::debug!(resource = %name, "skipping resource absent from baseline");
                traversal.resources_skipped.push(name.clone());
                continue;
            };
            tracing::debug!(resource = %name, "comparing resource");
            let before = traversal.violations.len();
            compare_tree(
                self.rules,
                base_tree,
                current_tree,
                &AttributePath::resource(name.as_str()),
                &mut traversal.violations,
            );
            log_violations(&traversal.violations[before..]);
            traversal.resources_compared.push(name.clone());
        }

        if self.options.include_data_sources {
            for (name, current_tree) in &current.data_sources {
                let Some(base_tree) = baseline.data_sources.get(name) else {
                    tracing::debug!(data_source = %name, "skipping data source absent from baseline");
                    continue;
                };
                tracing::debug!(data_source = %name, "comparing data source");
                let before = traversal.violations.len();
                compare_tree(
                    self.rules,
                    base_tree,
                    current_tree,
                    &AttributePath::data_source(name),
                    &mut traversal.violations,
                );
                log_violations(&traversal.violations[before..]);
                traversal.data_sources_compared.push(name.clone());
            }
        }

        Ok(traversal)
    }
}
