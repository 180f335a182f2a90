#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use schemacheck_core::diff::diff;
use schemacheck_core::errors::CompatError;
use schemacheck_core::logging_facility::test_capture::init_test_capture;
use schemacheck_core::model::{AttributeKind, AttributeNode};
use schemacheck_core::{log_op_end, log_op_error, log_op_start};
use schemacheck_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ATTRIBUTE_PATH, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_PROVIDER, FIELD_RESOURCE, FIELD_RESOURCE_COUNT,
    FIELD_RULE, FIELD_VIOLATION_COUNT,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = CompatError::UnknownRule {
        name: "Nope".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_UNKNOWN_RULE"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("UnknownRule"));
}

#[test]
fn test_diff_logs_boundaries_with_violation_count() {
    let capture = init_test_capture();
    let provider = "logging-test-provider-4";

    let base = single_attribute(provider, "acme_widget", "zone", optional_string());
    let current = single_attribute(
        provider,
        "acme_widget",
        "zone",
        AttributeNode::new(AttributeKind::String).required(),
    );
    diff(&base, &current).unwrap();

    let mine: Vec<_> = capture
        .events_for_op("diff")
        .into_iter()
        .filter(|e| e.field(FIELD_PROVIDER) == Some(provider))
        .collect();

    assert_eq!(mine.len(), 2, "one start and one end");
    assert_eq!(mine[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(mine[1].event.as_deref(), Some(EVENT_END));
    assert_eq!(mine[1].field(FIELD_VIOLATION_COUNT), Some("1"));
    assert_eq!(mine[1].field(FIELD_RESOURCE_COUNT), Some("1"));
}

#[test]
fn test_diff_logs_end_error_on_provider_mismatch() {
    let capture = init_test_capture();
    let current_provider = "logging-test-provider-5";

    let base = single_attribute("acme", "acme_widget", "zone", optional_string());
    let current = single_attribute(current_provider, "acme_widget", "zone", optional_string());
    assert!(diff(&base, &current).is_err());

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("diff")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_PROVIDER) == Some(current_provider)
            && e.field(FIELD_ERR_CODE) == Some("ERR_PROVIDER_MISMATCH")
    });
    assert_eq!(errors, 1);
}

#[test]
fn test_diff_logs_each_violation_at_debug() {
    let capture = init_test_capture();
    let resource = "logtest_widget_6";

    // Given a resource whose attribute turns required
    let base = single_attribute("acme", resource, "zone", optional_string());
    let current = single_attribute(
        "acme",
        resource,
        "zone",
        AttributeNode::new(AttributeKind::String).required(),
    );

    // When diffed
    diff(&base, &current).unwrap();

    // Then the resource comparison and the violation are both logged
    let compared = capture.count_events(|e| e.field(FIELD_RESOURCE) == Some(resource));
    assert_eq!(compared, 1);

    let path = format!("{}.zone", resource);
    let violations: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.field(FIELD_ATTRIBUTE_PATH) == Some(path.as_str()))
        .collect();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].level, tracing::Level::DEBUG);
    assert_eq!(violations[0].field(FIELD_RULE), Some("OptionalToRequired"));
}
