//! Opt-in rules, enabled through `RuleSet::extended()` or configuration

use crate::model::{AttributeNode, AttributePath, Violation};

use super::Rule;

/// Attribute now forces replacement of the resource
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceNewAdded;

impl Rule for ForceNewAdded {
    fn name(&self) -> &'static str {
        "ForceNewAdded"
    }

    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation> {
        if base.kind.is_absent() || current.kind.is_absent() {
            return None;
        }
        if base.force_new || !current.force_new {
            return None;
        }
        Some(Violation::new(
            path.clone(),
            self.name(),
            format!(
                "changing '{}' now replaces the resource",
                path.attribute_name()
            ),
        ))
    }
}

/// Upper item bound introduced or lowered
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxItemsReduced;

impl Rule for MaxItemsReduced {
    fn name(&self) -> &'static str {
        "MaxItemsReduced"
    }

    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation> {
        if current.max_items == 0 {
            return None;
        }
        if base.max_items != 0 && current.max_items >= base.max_items {
            return None;
        }
        let before = match base.max_items {
            0 => "unbounded".to_string(),
            n => n.to_string(),
        };
        Some(Violation::new(
            path.clone(),
            self.name(),
            format!(
                "max_items of '{}' reduced from {} to {}",
                path.attribute_name(),
                before,
                current.max_items
            ),
        ))
    }
}

/// Lower item bound raised
#[derive(Debug, Clone, Copy, Default)]
pub struct MinItemsIncreased;

impl Rule for MinItemsIncreased {
    fn name(&self) -> &'static str {
        "MinItemsIncreased"
    }

    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation> {
        if current.min_items <= base.min_items {
            return None;
        }
        Some(Violation::new(
            path.clone(),
            self.name(),
            format!(
                "min_items of '{}' increased from {} to {}",
                path.attribute_name(),
                base.min_items,
                current.min_items
            ),
        ))
    }
}
