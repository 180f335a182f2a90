use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::attribute::AttributeNode;

/// Per-operation time budgets, in minutes
///
/// Carried through snapshots for completeness; no rule inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<u32>,
}

/// The attribute set of one resource type (or of one nested block)
///
/// Attribute names are unique by construction. `BTreeMap` keeps iteration in
/// lexicographic name order, which the differ relies on for stable output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeTree {
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<Timeouts>,
}

impl AttributeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated name replaces the earlier node
    pub fn with_attribute(mut self, name: impl Into<String>, node: AttributeNode) -> Self {
        self.attributes.insert(name.into(), node);
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = Some(timeouts);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeNode> {
        self.attributes.get(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of attributes including those in nested blocks, at any depth
    pub fn attribute_count_recursive(&self) -> usize {
        self.attributes
            .values()
            .map(|node| 1 + node.nested().map_or(0, AttributeTree::attribute_count_recursive))
            .sum()
    }
}
