use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::gate::AuthenticatedUser;
use crate::auth::jwt::mint_access_token;
use crate::auth::password::{verify_password, verify_unknown_user};
use crate::db::require_db;
use crate::error::{AppError, AuthRejection};
use crate::errors::DomainError;
use crate::extractors::ValidatedJson;
use crate::logging::security;
use crate::repos::users;
use crate::routes::{db_context, non_blank};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange username and password for a 7-day bearer token.
///
/// Unknown user and wrong password produce the same 401 after the same
/// bcrypt work.
async fn login(
    app_state: web::Data<AppState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { username, password } = body.into_inner();
    let (Some(username), Some(password)) = (non_blank(username), password.filter(|p| !p.is_empty()))
    else {
        return Err(DomainError::missing_fields("Username and password are required").into());
    };

    let db = require_db(&app_state)?;
    let user = users::find_by_username(db, &username)
        .await
        .map_err(db_context("Login failed"))?;

    let Some(user) = user else {
        verify_unknown_user(password).await?;
        security::login_failed("unknown_user", &username);
        return Err(AppError::unauthorized(AuthRejection::BadLogin));
    };

    if !verify_password(password, user.password_hash.clone()).await? {
        security::login_failed("bad_password", &username);
        return Err(AppError::unauthorized(AuthRejection::BadLogin));
    }

    let token = mint_access_token(
        &user.id.to_string(),
        &user.role,
        SystemTime::now(),
        &app_state.security,
    )?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

/// Identity of the caller, straight from the verified token.
async fn me(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(user)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login))
        .route("/me", web::get().to(me));
}
