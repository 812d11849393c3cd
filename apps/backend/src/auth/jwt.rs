use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Lifetime of an issued token: 7 days.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Claims carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub role: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Uniform verification failure.
///
/// Bad signature, malformed input, expiry, and missing claims all collapse
/// into this one value so callers cannot tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("token rejected")]
pub struct TokenRejected;

/// Mint a HS256 access token valid for [`TOKEN_TTL_SECS`] from `now`.
pub fn mint_access_token(
    user_id: &str,
    role: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    debug_assert!(!user_id.is_empty(), "user_id must not be empty");

    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let claims = Claims {
        user_id: user_id.to_string(),
        role: role.to_string(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a token and return its claims.
///
/// The algorithm is pinned to the configured one and expiry is checked
/// with zero leeway.
pub fn verify_access_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<Claims, TokenRejected> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "iat"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| TokenRejected)
}
