use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::tree::AttributeTree;

/// One complete view of a provider's configuration surface
///
/// Built once by a producer, then only read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Only used to check that two snapshots describe the same provider
    pub provider_name: String,

    #[serde(default)]
    pub resources: BTreeMap<String, AttributeTree>,

    #[serde(default)]
    pub data_sources: BTreeMap<String, AttributeTree>,
}

impl Snapshot {
    pub fn new(provider_name: impl Into<String>) -> Self {
        Self {
            provider_name: provider_name.into(),
            ..Self::default()
        }
    }

    pub fn with_resource(mut self, name: impl Into<String>, tree: AttributeTree) -> Self {
        self.resources.insert(name.into(), tree);
        self
    }

    pub fn with_data_source(mut self, name: impl Into<String>, tree: AttributeTree) -> Self {
        self.data_sources.insert(name.into(), tree);
        self
    }
}
