#![allow(clippy::unwrap_used, clippy::expect_used)]

use schemacheck_core::model::{AttributeKind, AttributeNode, AttributePath, Violation};
use schemacheck_core::rules::{
    apply_all, BecomeComputedOnly, DefaultValueChange, ForceNewAdded, MaxItemsReduced,
    MinItemsIncreased, NewRequiredProperty, OptionalRemoveComputed, OptionalToRequired,
    PropertyTypeMatches, Rule, RuleSet,
};
use std::sync::Arc;

fn path() -> AttributePath {
    AttributePath::resource("acme_widget").child("setting")
}

fn string() -> AttributeNode {
    AttributeNode::new(AttributeKind::String)
}

fn fires(rule: &dyn Rule, base: &AttributeNode, current: &AttributeNode) -> bool {
    rule.check(base, current, &path()).is_some()
}

#[test]
fn test_property_type_matches_ignores_absent_sides() {
    let rule = PropertyTypeMatches;
    assert!(fires(&rule, &string(), &AttributeNode::new(AttributeKind::Bool)));
    assert!(!fires(&rule, &string(), &string()));
    assert!(!fires(&rule, &AttributeNode::absent(), &string()));
    assert!(!fires(&rule, &string(), &AttributeNode::absent()));
}

#[test]
fn test_optional_remove_computed_requires_still_optional() {
    let rule = OptionalRemoveComputed;
    let base = string().optional().computed();
    assert!(fires(&rule, &base, &string().optional()));
    assert!(!fires(&rule, &base, &string().optional().computed()));
    // Becoming Required is OptionalToRequired's concern
    assert!(!fires(&rule, &base, &string().required()));
    assert!(!fires(&rule, &string().optional(), &string().optional()));
}

#[test]
fn test_optional_to_required() {
    let rule = OptionalToRequired;
    assert!(fires(&rule, &string().optional(), &string().required()));
    assert!(fires(&rule, &string().optional().computed(), &string().required()));
    assert!(!fires(&rule, &string().required(), &string().required()));
    assert!(!fires(&rule, &string().required(), &string().optional()));
}

#[test]
fn test_become_computed_only() {
    let rule = BecomeComputedOnly;
    assert!(fires(&rule, &string().optional(), &string().computed()));
    assert!(fires(&rule, &string().required(), &string().computed()));
    assert!(!fires(&rule, &string().computed(), &string().computed()));
    assert!(!fires(&rule, &string().optional(), &string().optional().computed()));
}

#[test]
fn test_new_required_property_needs_absent_baseline() {
    let rule = NewRequiredProperty;
    let violation = rule
        .check(&AttributeNode::absent(), &string().required(), &path())
        .unwrap();
    assert_eq!(violation.rule, "NewRequiredProperty");
    assert!(violation.message.contains("setting"));

    assert!(!fires(&rule, &AttributeNode::absent(), &string().optional()));
    assert!(!fires(&rule, &string().optional(), &string().required()));
}

#[test]
fn test_default_value_change_compares_by_value() {
    let rule = DefaultValueChange;
    let int = AttributeNode::new(AttributeKind::Int);
    assert!(!fires(&rule, &int.clone().with_default(5_i64), &int.clone().with_default(5.0)));
    assert!(fires(&rule, &int.clone().with_default(5_i64), &int.clone().with_default(6_i64)));
    assert!(fires(&rule, &int.clone(), &int.clone().with_default(0_i64)));
    assert!(!fires(&rule, &string().with_default(true), &string().with_default(true)));
}

#[test]
fn test_force_new_added() {
    let rule = ForceNewAdded;
    assert!(fires(&rule, &string().optional(), &string().optional().force_new()));
    assert!(!fires(&rule, &string().force_new(), &string().force_new()));
    assert!(!fires(&rule, &string().force_new(), &string()));
    assert!(!fires(&rule, &AttributeNode::absent(), &string().force_new()));
}

#[test]
fn test_max_items_reduced() {
    let rule = MaxItemsReduced;
    let list = AttributeNode::new(AttributeKind::List);
    assert!(fires(&rule, &list.clone(), &list.clone().with_max_items(1)));
    assert!(fires(&rule, &list.clone().with_max_items(5), &list.clone().with_max_items(2)));
    assert!(!fires(&rule, &list.clone().with_max_items(2), &list.clone().with_max_items(5)));
    assert!(!fires(&rule, &list.clone().with_max_items(2), &list.clone()));

    let violation = rule
        .check(&list.clone(), &list.with_max_items(1), &path())
        .unwrap();
    assert!(violation.message.contains("unbounded"));
}

#[test]
fn test_min_items_increased() {
    let rule = MinItemsIncreased;
    let set = AttributeNode::new(AttributeKind::Set);
    assert!(fires(&rule, &set.clone(), &set.clone().with_min_items(1)));
    assert!(!fires(&rule, &set.clone().with_min_items(2), &set.clone().with_min_items(1)));
}

#[test]
fn test_apply_all_keeps_rule_order() {
    let rules: Vec<Arc<dyn Rule>> = vec![Arc::new(DefaultValueChange), Arc::new(PropertyTypeMatches)];
    let base = string().with_default("a");
    let current = AttributeNode::new(AttributeKind::Int).with_default(1_i64);

    let names: Vec<String> = apply_all(&rules, &base, &current, &path())
        .into_iter()
        .map(|v| v.rule)
        .collect();

    assert_eq!(names, vec!["DefaultValueChange", "PropertyTypeMatches"]);
}

#[test]
fn test_custom_rule_plugs_in_without_differ_changes() {
    struct ComputedDropped;

    impl Rule for ComputedDropped {
        fn name(&self) -> &'static str {
            "ComputedDropped"
        }

        fn check(
            &self,
            base: &AttributeNode,
            current: &AttributeNode,
            path: &AttributePath,
        ) -> Option<Violation> {
            (base.computed && !current.computed)
                .then(|| Violation::new(path.clone(), self.name(), "computed dropped"))
        }
    }

    let rules = RuleSet::new().with_rule(ComputedDropped);
    let violations = rules.apply_all(&string().computed(), &string(), &path());

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "ComputedDropped");
}
