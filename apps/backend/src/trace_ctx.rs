//! Task-local trace id for the request being served.
//!
//! `RequestTrace` sets the scope; error responses and security log events
//! read it back through [`trace_id`].

use std::future::Future;

use tokio::task_local;

const NO_TRACE: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or `"unknown"` outside one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(String::clone)
        .unwrap_or_else(|_| NO_TRACE.to_string())
}

pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

/// Synchronous counterpart of [`with_trace_id`].
///
/// Service `call` bodies run before the response future is first polled,
/// so rejections produced there need the id set outside the async scope.
pub fn sync_with_trace_id<F, R>(trace_id: String, f: F) -> R
where
    F: FnOnce() -> R,
{
    TRACE_ID.sync_scope(trace_id, f)
}
