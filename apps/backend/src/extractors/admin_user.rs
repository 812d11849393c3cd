use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use super::current_user::authenticated_user;
use crate::auth::gate::{authorize, AdminUser};
use crate::error::AppError;

/// Both gates in order: 401 if unauthenticated, 403 if not an admin.
pub(crate) fn admin_user(req: &HttpRequest) -> Result<AdminUser, AppError> {
    if let Some(admin) = req.extensions().get::<AdminUser>() {
        return Ok(admin.clone());
    }

    let user = authenticated_user(req)?;
    let admin = authorize(Some(user))?;
    req.extensions_mut().insert(admin.clone());
    Ok(admin)
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(admin_user(req))
    }
}
