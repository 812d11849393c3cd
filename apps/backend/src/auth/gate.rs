//! Authentication and authorization gates.
//!
//! `authenticate` turns an inbound header map into an [`AuthenticatedUser`]
//! or a 401; `authorize` turns that typed identity into an [`AdminUser`] or
//! a 403. `AdminUser` can only be built from an `AuthenticatedUser`, so the
//! two checks cannot run out of order.

use std::ops::Deref;

use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use serde::Serialize;

use crate::auth::jwt::verify_access_token;
use crate::error::{AppError, AuthRejection};
use crate::logging::security;
use crate::state::security_config::SecurityConfig;

pub const ADMIN_ROLE: &str = "admin";

/// Identity taken from a verified token in the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// An [`AuthenticatedUser`] whose role passed the admin check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser(AuthenticatedUser);

impl AdminUser {
    pub fn into_inner(self) -> AuthenticatedUser {
        self.0
    }
}

impl Deref for AdminUser {
    type Target = AuthenticatedUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Extract and verify the bearer credential.
pub fn authenticate(
    headers: &HeaderMap,
    security_config: &SecurityConfig,
) -> Result<AuthenticatedUser, AppError> {
    let token = bearer_token(headers).map_err(|reason| {
        security::auth_rejected(reason);
        AppError::unauthorized(reason)
    })?;

    let claims = verify_access_token(token, security_config).map_err(|_| {
        security::auth_rejected(AuthRejection::InvalidCredential);
        AppError::unauthorized(AuthRejection::InvalidCredential)
    })?;

    Ok(AuthenticatedUser {
        user_id: claims.user_id,
        role: claims.role,
    })
}

/// Require the admin role on an already authenticated identity.
pub fn authorize(identity: Option<AuthenticatedUser>) -> Result<AdminUser, AppError> {
    match identity {
        Some(user) if user.is_admin() => Ok(AdminUser(user)),
        Some(user) => {
            security::admin_denied(Some(&user.user_id));
            Err(AppError::forbidden())
        }
        None => {
            security::admin_denied(None);
            Err(AppError::forbidden())
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthRejection> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthRejection::MissingCredential)?;

    let value = value.to_str().map_err(|_| AuthRejection::GateFailure)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => Ok(token),
        _ => Err(AuthRejection::InvalidCredential),
    }
}
