use tracing::warn;

use crate::error::AuthRejection;
use crate::trace_ctx;

/// A request was turned away by the authentication gate.
pub fn auth_rejected(reason: AuthRejection) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_AUTH_REJECTED",
        %trace_id,
        reason = ?reason,
        "Authentication rejected"
    );
}

/// An identity without the admin role hit an admin-only operation.
pub fn admin_denied(user_id: Option<&str>) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ADMIN_DENIED",
        %trace_id,
        user_id = user_id.unwrap_or(""),
        "Admin access denied"
    );
}

/// Log a failed login attempt.
pub fn login_failed(reason: &str, username: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        username,
        reason,
        "Authentication failure"
    );
}
