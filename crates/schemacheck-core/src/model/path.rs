use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix for data-source resource names in paths and reports
pub const DATA_SOURCE_PREFIX: &str = "data.";

/// Location of an attribute: resource name plus nested attribute names
///
/// Displayed as `resource.outer.inner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributePath {
    pub resource: String,
    pub segments: Vec<String>,
}

impl AttributePath {
    /// Path of a resource root (no segments)
    pub fn resource(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            segments: Vec::new(),
        }
    }

    /// Path of a data-source root, `data.<type>`
    pub fn data_source(data_source: &str) -> Self {
        Self::resource(format!("{}{}", DATA_SOURCE_PREFIX, data_source))
    }

    /// Path one level deeper
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self {
            resource: self.resource.clone(),
            segments,
        }
    }

    /// Name of the attribute this path points at
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Dotted attribute name without the resource, e.g. `rule.port`
    pub fn attribute_name(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource)?;
        for segment in &self.segments {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

/// One detected incompatibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub path: AttributePath,
    /// Name of the rule that fired
    pub rule: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: AttributePath, rule: &str, message: impl Into<String>) -> Self {
        Self {
            path,
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.path, self.message, self.rule)
    }
}
