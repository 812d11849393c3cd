//! bcrypt password hashing on the blocking pool.

use actix_web::web;
use tokio::sync::OnceCell;

use crate::error::AppError;

pub use bcrypt::DEFAULT_COST;

pub async fn hash_password(plain: String, cost: u32) -> Result<String, AppError> {
    web::block(move || bcrypt::hash(plain, cost))
        .await
        .map_err(|e| AppError::internal(format!("hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("failed to hash password: {e}")))
}

/// Returns `false` for a wrong password and for a hash that cannot be parsed.
pub async fn verify_password(plain: String, hash: String) -> Result<bool, AppError> {
    let verified = web::block(move || bcrypt::verify(plain, &hash))
        .await
        .map_err(|e| AppError::internal(format!("verify task failed: {e}")))?;
    Ok(verified.unwrap_or(false))
}

/// Stand-in hash for logins naming no stored user, at the cost real
/// accounts are created with.
static UNKNOWN_USER_HASH: OnceCell<String> = OnceCell::const_new();

async fn unknown_user_hash() -> Result<&'static str, AppError> {
    UNKNOWN_USER_HASH
        .get_or_try_init(|| hash_password("unknown-user-placeholder".into(), DEFAULT_COST))
        .await
        .map(String::as_str)
}

/// Spend one full bcrypt verification on a login for a missing user so it
/// takes as long as a wrong password. Always `false`.
pub async fn verify_unknown_user(plain: String) -> Result<bool, AppError> {
    let hash = unknown_user_hash().await?.to_owned();
    verify_password(plain, hash).await?;
    Ok(false)
}
