use std::fmt;
use std::sync::Arc;

use crate::model::{AttributeNode, AttributePath, Violation};

use super::catalog::{
    BecomeComputedOnly, DefaultValueChange, NewRequiredProperty, OptionalRemoveComputed,
    OptionalToRequired, PropertyTypeMatches,
};
use super::extended::{ForceNewAdded, MaxItemsReduced, MinItemsIncreased};
use super::{apply_all, Rule};

/// Names of the baseline catalog, in evaluation order
pub const BASELINE_RULE_NAMES: [&str; 6] = [
    "PropertyTypeMatches",
    "OptionalRemoveComputed",
    "OptionalToRequired",
    "BecomeComputedOnly",
    "NewRequiredProperty",
    "DefaultValueChange",
];

/// Names of the opt-in rules, in evaluation order
pub const EXTENDED_RULE_NAMES: [&str; 3] = ["ForceNewAdded", "MaxItemsReduced", "MinItemsIncreased"];

/// Find a built-in rule by name
pub fn lookup(name: &str) -> Option<Arc<dyn Rule>> {
    let rule: Arc<dyn Rule> = match name {
        "PropertyTypeMatches" => Arc::new(PropertyTypeMatches),
        "OptionalRemoveComputed" => Arc::new(OptionalRemoveComputed),
        "OptionalToRequired" => Arc::new(OptionalToRequired),
        "BecomeComputedOnly" => Arc::new(BecomeComputedOnly),
        "NewRequiredProperty" => Arc::new(NewRequiredProperty),
        "DefaultValueChange" => Arc::new(DefaultValueChange),
        "ForceNewAdded" => Arc::new(ForceNewAdded),
        "MaxItemsReduced" => Arc::new(MaxItemsReduced),
        "MinItemsIncreased" => Arc::new(MinItemsIncreased),
        _ => return None,
    };
    Some(rule)
}

/// Ordered, immutable-once-built list of rules
///
/// Order only affects the order of violations within one attribute.
///
/// # Example
/// ```
/// use schemacheck_core::rules::{RuleSet, ForceNewAdded};
///
/// let rules = RuleSet::baseline()
///     .without("DefaultValueChange")
///     .with_rule(ForceNewAdded);
/// assert_eq!(rules.len(), 6);
/// assert_eq!(rules.names().last(), Some(&"ForceNewAdded"));
/// ```
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleSet {
    /// Empty set; add rules with [`RuleSet::with_rule`]
    pub fn new() -> Self {
        Self::default()
    }

    /// The six baseline rules
    pub fn baseline() -> Self {
        Self::from_names(&BASELINE_RULE_NAMES)
    }

    /// Baseline followed by the opt-in rules
    pub fn extended() -> Self {
        let mut set = Self::baseline();
        set.rules
            .extend(Self::from_names(&EXTENDED_RULE_NAMES).rules);
        set
    }

    fn from_names(names: &[&str]) -> Self {
        Self {
            rules: names.iter().filter_map(|name| lookup(name)).collect(),
        }
    }

    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn with_shared_rule(mut self, rule: Arc<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Drop every rule with the given name
    pub fn without(mut self, name: &str) -> Self {
        self.rules.retain(|rule| rule.name() != name);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name() == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in the set against one attribute pair
    pub fn apply_all(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Vec<Violation> {
        apply_all(&self.rules, base, current, path)
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
