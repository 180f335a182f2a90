//! Baseline rule catalog
//!
//! Each rule targets one way an attribute edit can invalidate configuration
//! that worked against the released schema.

use crate::model::{AttributeNode, AttributePath, Violation};

use super::Rule;

/// Kind changed while present on both sides
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyTypeMatches;

impl Rule for PropertyTypeMatches {
    fn name(&self) -> &'static str {
        "PropertyTypeMatches"
    }

    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation> {
        if base.kind.is_absent() || current.kind.is_absent() || base.kind == current.kind {
            return None;
        }
        Some(Violation::new(
            path.clone(),
            self.name(),
            format!(
                "type of '{}' changed from {} to {}",
                path.attribute_name(),
                base.kind,
                current.kind
            ),
        ))
    }
}

/// Optional+Computed attribute lost Computed
///
/// Configurations that left the attribute unset relied on the provider
/// filling it in and will now plan a diff.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalRemoveComputed;

impl Rule for OptionalRemoveComputed {
    fn name(&self) -> &'static str {
        "OptionalRemoveComputed"
    }

    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation> {
        if !(base.optional && base.computed && current.optional && !current.computed) {
            return None;
        }
        Some(Violation::new(
            path.clone(),
            self.name(),
            format!(
                "'{}' is no longer Computed; unset values will no longer be filled in",
                path.attribute_name()
            ),
        ))
    }
}

/// Optional attribute became Required
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalToRequired;

impl Rule for OptionalToRequired {
    fn name(&self) -> &'static str {
        "OptionalToRequired"
    }

    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation> {
        if !(base.optional && current.required) {
            return None;
        }
        Some(Violation::new(
            path.clone(),
            self.name(),
            format!(
                "'{}' changed from Optional to Required",
                path.attribute_name()
            ),
        ))
    }
}

/// Settable attribute became Computed-only
#[derive(Debug, Clone, Copy, Default)]
pub struct BecomeComputedOnly;

impl Rule for BecomeComputedOnly {
    fn name(&self) -> &'static str {
        "BecomeComputedOnly"
    }

    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation> {
        let was_settable = base.optional || base.required;
        let computed_only = !current.optional && !current.required && current.computed;
        if !(was_settable && computed_only) {
            return None;
        }
        Some(Violation::new(
            path.clone(),
            self.name(),
            format!(
                "'{}' became Computed-only and can no longer be set",
                path.attribute_name()
            ),
        ))
    }
}

/// Attribute absent from the baseline is Required now
///
/// The differ only pairs attributes present in both trees, so this rule
/// fires only when a caller hands it an explicit absent baseline node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewRequiredProperty;

impl Rule for NewRequiredProperty {
    fn name(&self) -> &'static str {
        "NewRequiredProperty"
    }

    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation> {
        if !(base.kind.is_absent() && current.required) {
            return None;
        }
        Some(Violation::new(
            path.clone(),
            self.name(),
            format!("new Required attribute '{}'", path.attribute_name()),
        ))
    }
}

/// Default value changed
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueChange;

impl Rule for DefaultValueChange {
    fn name(&self) -> &'static str {
        "DefaultValueChange"
    }

    fn check(
        &self,
        base: &AttributeNode,
        current: &AttributeNode,
        path: &AttributePath,
    ) -> Option<Violation> {
        if base.default == current.default {
            return None;
        }
        Some(Violation::new(
            path.clone(),
            self.name(),
            format!(
                "default of '{}' changed from {} to {}",
                path.attribute_name(),
                base.default,
                current.default
            ),
        ))
    }
}
