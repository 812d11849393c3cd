use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use tracing::error;

use crate::auth::gate::{authenticate, AuthenticatedUser};
use crate::error::{AppError, AuthRejection};
use crate::state::app_state::AppState;

/// Run the authentication gate for this request.
///
/// The verified identity is cached in request extensions so later
/// extractors in the same request reuse it instead of re-verifying.
pub(crate) fn authenticated_user(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    if let Some(user) = req.extensions().get::<AuthenticatedUser>() {
        return Ok(user.clone());
    }

    let Some(app_state) = req.app_data::<web::Data<AppState>>() else {
        error!("AppState missing from request; failing closed");
        return Err(AppError::unauthorized(AuthRejection::GateFailure));
    };

    let user = authenticate(req.headers(), &app_state.security)?;
    req.extensions_mut().insert(user.clone());
    Ok(user)
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticated_user(req))
    }
}
