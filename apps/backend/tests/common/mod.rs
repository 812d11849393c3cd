#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Check the error contract plus the status-specific headers:
/// 401 carries `WWW-Authenticate: Bearer`, 503 carries `Retry-After`,
/// client errors carry neither.
pub async fn assert_error(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: &str,
) {
    let headers = resp.headers().clone();
    match expected_status.as_u16() {
        401 => {
            assert_eq!(
                headers
                    .get("WWW-Authenticate")
                    .and_then(|v| v.to_str().ok()),
                Some("Bearer")
            );
            assert!(headers.get("Retry-After").is_none());
        }
        503 => {
            assert!(headers.get("Retry-After").is_some());
            assert!(headers.get("WWW-Authenticate").is_none());
        }
        400 | 403 | 404 | 409 => {
            assert!(headers.get("WWW-Authenticate").is_none());
            assert!(headers.get("Retry-After").is_none());
        }
        _ => {}
    }

    backend_test_support::error_body::assert_error_body(
        resp,
        expected_status,
        expected_code,
        expected_message,
    )
    .await;
}

/// Read a successful response body as JSON, asserting the status first.
pub async fn read_json(resp: ServiceResponse<BoxBody>, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        expected_status,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).expect("response body should be JSON")
}
