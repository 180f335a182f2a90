//! Compatibility rules
//!
//! A rule looks at one attribute's baseline and current definitions and
//! either stays silent or reports a [`Violation`]. Rules hold no state and
//! never fail, so they can run in any order or in parallel. New policies are
//! added by implementing [`Rule`] and registering the rule in a [`RuleSet`];
//! the differ does not change.

pub mod catalog;
pub mod extended;
pub mod registry;

use std::sync::Arc;

use crate::model::{AttributeNode, AttributePath, Violation};

pub use catalog::{
    BecomeComputedOnly, DefaultValueChange, NewRequiredProperty, OptionalRemoveComputed,
    OptionalToRequired, PropertyTypeMatches,
};
pub use extended::{ForceNewAdded, MaxItemsReduced, MinItemsIncreased};
pub use registry::{lookup, RuleSet, BASELINE_RULE_NAMES, EXTENDED_RULE_NAMES};

/// A single compatibility check
pub trait Rule: Send + Sync {
    /// Stable name, used in reports and configuration
    fn name(&self) -> &'static str;

    /// Compare one attribute across versions
    ///
    /// `None` covers both "compatible" and "not applicable".
    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation>;
}

/// Run every rule against one attribute pair
///
/// Results come back in rule order; silent rules contribute nothing.
pub fn apply_all(
    rules: &[Arc<dyn Rule>],
    base: &AttributeNode,
    current: &AttributeNode,
    path: &AttributePath,
) -> Vec<Violation> {
    rules
        .iter()
        .filter_map(|rule| rule.check(base, current, path))
        .collect()
}
