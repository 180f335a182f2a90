//! Check configuration
//!
//! ```toml
//! include_data_sources = false
//!
//! [rules]
//! extended = false
//! disabled = ["DefaultValueChange"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::diff::DiffOptions;
use crate::errors::{CompatError, Result};
use crate::rules::{lookup, RuleSet};

/// Rule selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Add the opt-in rules after the baseline catalog
    pub extended: bool,
    /// Rule names to leave out
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    pub include_data_sources: bool,
    pub rules: RulesConfig,
}

impl CheckConfig {
    /// Read a configuration file
    ///
    /// # Errors
    ///
    /// `CompatError::Io` if the file cannot be read, `CompatError::InvalidConfig`
    /// if it is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CompatError::Io {
            op: "load_config".to_string(),
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// `CompatError::InvalidConfig` on syntax errors or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CompatError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Build the rule set this configuration selects
    ///
    /// # Errors
    ///
    /// `CompatError::UnknownRule` if a disabled name is not a known rule.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let mut rules = if self.rules.extended {
            RuleSet::extended()
        } else {
            RuleSet::baseline()
        };
        for name in &self.rules.disabled {
            if lookup(name).is_none() {
                return Err(CompatError::UnknownRule { name: name.clone() });
            }
            rules = rules.without(name);
        }
        Ok(rules)
    }

    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            include_data_sources: self.include_data_sources,
        }
    }
}
