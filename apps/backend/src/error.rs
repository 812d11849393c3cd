use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::domain::{ConflictKind, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::{DomainError, ErrorCode};
use crate::trace_ctx;

/// JSON error body returned for every failed request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    pub trace_id: String,
}

/// Why a request was answered with 401.
///
/// Each reason has exactly one fixed message; nothing else about the
/// failed check reaches the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No `Authorization` header at all
    MissingCredential,
    /// Bad scheme, empty token, bad signature, malformed or expired
    InvalidCredential,
    /// Header could not be parsed
    GateFailure,
    /// Login with unknown user or wrong password
    BadLogin,
}

impl AuthRejection {
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingCredential => "Authentication required",
            Self::InvalidCredential => "Invalid or expired token",
            Self::GateFailure => "Authentication failed",
            Self::BadLogin => "Invalid credentials",
        }
    }
}

pub const FORBIDDEN_MESSAGE: &str = "Admin access required";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized: {0:?}")]
    Unauthorized(AuthRejection),
    #[error("Forbidden")]
    Forbidden,
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db {
        /// Client-facing message, e.g. "Failed to create skill"
        message: &'static str,
        detail: String,
    },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::Forbidden => ErrorCode::Forbidden,
            AppError::Validation { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable => ErrorCode::DbUnavailable,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Client-safe message for the `error` field.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized(reason) => reason.message().to_string(),
            AppError::Forbidden => FORBIDDEN_MESSAGE.to_string(),
            AppError::Validation { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Db { message, .. } => (*message).to_string(),
            AppError::DbUnavailable => "Service temporarily unavailable".to_string(),
            AppError::Internal { .. } | AppError::Config { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Db { .. } | AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::DbUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn unauthorized(reason: AuthRejection) -> Self {
        Self::Unauthorized(reason)
    }

    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn db(message: &'static str, detail: impl Into<String>) -> Self {
        Self::Db {
            message,
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    /// Replace the client-facing message of a database failure.
    /// Other variants pass through untouched.
    pub fn context(self, message: &'static str) -> Self {
        match self {
            AppError::Db { detail, .. } => AppError::Db { message, detail },
            AppError::Internal { detail } => AppError::Db { message, detail },
            other => other,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(ValidationKind::MissingFields(message)) => {
                AppError::invalid(ErrorCode::MissingFields, message)
            }
            DomainError::Validation(ValidationKind::SkillLevelOutOfRange) => AppError::invalid(
                ErrorCode::InvalidSkillLevel,
                "Level must be between 1 and 5",
            ),
            DomainError::Validation(ValidationKind::Other(detail)) => {
                AppError::invalid(ErrorCode::ValidationError, detail)
            }
            DomainError::NotFound(kind) => {
                let (code, detail) = match kind {
                    NotFoundKind::About => {
                        (ErrorCode::AboutNotFound, "About information not found")
                    }
                    NotFoundKind::Skill => (ErrorCode::SkillNotFound, "Skill not found"),
                    NotFoundKind::Project => (ErrorCode::ProjectNotFound, "Project not found"),
                    NotFoundKind::Contact => (ErrorCode::ContactNotFound, "Contact not found"),
                };
                AppError::not_found(code, detail)
            }
            DomainError::Conflict(ConflictKind::UsernameTaken, detail) => AppError::Conflict {
                code: ErrorCode::UsernameTaken,
                detail,
            },
            DomainError::Conflict(_, detail) => AppError::Conflict {
                code: ErrorCode::Conflict,
                detail,
            },
            DomainError::Infra(InfraErrorKind::DbUnavailable, _) => AppError::DbUnavailable,
            DomainError::Infra(_, detail) => AppError::db("Database error", detail),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(DomainError::from(e))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(trace_id = %trace_id, code = %self.code(), error = %self, "request_failed");
        }

        let body = ErrorBody {
            error: self.message(),
            code: self.code().as_str().to_string(),
            trace_id: trace_id.clone(),
        };

        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-trace-id", trace_id));

        match status {
            StatusCode::UNAUTHORIZED => {
                builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
            }
            StatusCode::SERVICE_UNAVAILABLE => {
                builder.insert_header((header::RETRY_AFTER, "1"));
            }
            _ => {}
        }

        builder.json(body)
    }
}
