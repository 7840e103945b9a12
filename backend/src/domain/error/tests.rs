//! Tests for domain error construction and trace capture.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> DomainError {
    DomainError::invalid_request("Invalid input.")
}

#[rstest]
fn invalid_request_constructor_sets_code(base_error: DomainError) {
    assert_eq!(base_error.code(), ErrorCode::InvalidRequest);
    assert_eq!(base_error.message(), "Invalid input.");
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = DomainError::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(DomainErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: DomainError) {
    let result = base_error.try_with_trace_id("   ");
    assert!(matches!(result, Err(DomainErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = DomainError::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid trace id");
    let error = TraceId::scope(trace_id, async { DomainError::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn details_are_attached(base_error: DomainError) {
    let error = base_error.with_details(json!({ "field": "duration" }));
    assert_eq!(error.details(), Some(&json!({ "field": "duration" })));
}

#[rstest]
#[case(ErrorCode::InvalidRequest, true)]
#[case(ErrorCode::NotFound, true)]
#[case(ErrorCode::Conflict, true)]
#[case(ErrorCode::ServiceUnavailable, false)]
#[case(ErrorCode::InternalError, false)]
fn caller_errors_are_classified(#[case] code: ErrorCode, #[case] expected: bool) {
    assert_eq!(code.is_caller_error(), expected);
}

#[rstest]
fn display_uses_message() {
    let error = DomainError::conflict("Username already taken");
    assert_eq!(error.to_string(), "Username already taken");
}
