//! Error codes for the portfolio backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Missing, invalid or expired credential (one code for every 401)
    Unauthorized,
    /// Authenticated but not allowed (one code for every 403)
    Forbidden,

    // Request Validation
    /// Required fields absent or empty
    MissingFields,
    /// Skill level outside 1..=5
    InvalidSkillLevel,
    /// Path id is not a UUID
    InvalidId,
    /// General validation error
    ValidationError,
    /// Malformed request body
    BadRequest,

    // Resource Not Found
    AboutNotFound,
    SkillNotFound,
    ProjectNotFound,
    ContactNotFound,
    NotFound,

    // Conflicts
    /// Username already taken
    UsernameTaken,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical string for this code, exactly as it appears in responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",

            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidSkillLevel => "INVALID_SKILL_LEVEL",
            Self::InvalidId => "INVALID_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::AboutNotFound => "ABOUT_NOT_FOUND",
            Self::SkillNotFound => "SKILL_NOT_FOUND",
            Self::ProjectNotFound => "PROJECT_NOT_FOUND",
            Self::ContactNotFound => "CONTACT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
