//! Error body test helpers
//!
//! Asserts the backend's JSON error contract without depending on backend
//! types: `{ "error": <message>, "code": <CODE>, "traceId": <id> }` plus an
//! `x-trace-id` header that matches the body.

use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBodyLike {
    error: String,
    code: String,
    trace_id: String,
}

/// Assert that raw response parts conform to the error contract.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &actix_web::http::header::HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: &str,
) {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike = serde_json::from_slice(body_bytes).unwrap_or_else(|e| {
        panic!(
            "response body should be an error JSON object ({e}): {}",
            String::from_utf8_lossy(body_bytes)
        )
    });

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");

    assert_eq!(
        body.trace_id, trace_id_header,
        "traceId in body should match x-trace-id header"
    );
    assert_eq!(body.code, expected_code);
    assert_eq!(body.error, expected_message);
}

/// Assert that a `ServiceResponse` conforms to the error contract.
pub async fn assert_error_body(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(
        status,
        &headers,
        &body,
        expected_status,
        expected_code,
        expected_message,
    );
}
