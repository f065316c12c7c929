#![allow(clippy::unwrap_used, clippy::expect_used)]

use wdiffer_core::errors::WdiffError;
use wdiffer_core::logging_facility::test_capture::init_test_capture;
use wdiffer_core::{log_op_end, log_op_error, log_op_start};
use wdiffer_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_EDIT_COUNT, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_NEW_PATH, FIELD_OLD_PATH,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, old = "a.txt", new = "b.txt");

    let start_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert_eq!(start_events.len(), 1);
    assert_eq!(start_events[0].field(FIELD_OLD_PATH), Some("a.txt"));
    assert_eq!(start_events[0].field(FIELD_NEW_PATH), Some("b.txt"));
    assert!(start_events[0].component.is_some());
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, edit_count = 3usize);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
    assert_eq!(end_events[0].field(FIELD_EDIT_COUNT), Some("3"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = WdiffError::InputUnavailable {
        path: "missing.txt".into(),
        reason: "not found".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].field(FIELD_ERR_CODE),
        Some("ERR_INPUT_UNAVAILABLE")
    );
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("InputUnavailable"));
    assert_eq!(error_events[0].level, tracing::Level::ERROR);
    let message = error_events[0].field("message").unwrap();
    assert!(message.starts_with("[ERR_INPUT_UNAVAILABLE]"), "message: {}", message);
    assert!(message.contains("missing.txt"));
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_4";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 1);

    let end = capture
        .events_for_op(op_name)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert_eq!(end.field(FIELD_EDIT_COUNT), None);

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
    let count = capture.count_events(|e| e.op.as_deref() == Some(op_name));
    assert_eq!(count, 2);
}
