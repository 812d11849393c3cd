use std::env;

use jsonwebtoken::Algorithm;
use tracing::warn;

use crate::config::RuntimeEnv;
use crate::error::AppError;

/// Signing secret used outside production when `JWT_SECRET` is unset.
const DEV_FALLBACK_SECRET: &[u8] = b"portfolio-dev-secret-do-not-use-in-production";

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Read `JWT_SECRET`.
    ///
    /// Production refuses to start without it. Other environments fall back
    /// to a development secret and log a warning.
    pub fn from_env(runtime: RuntimeEnv) -> Result<Self, AppError> {
        let secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());

        match secret {
            Some(secret) => Ok(Self::new(secret.into_bytes())),
            None if runtime.is_prod() => Err(AppError::config(
                "JWT_SECRET must be set when APP_ENV=prod",
            )),
            None => {
                warn!(?runtime, "JWT_SECRET not set; using development fallback secret");
                Ok(Self::new(DEV_FALLBACK_SECRET))
            }
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
