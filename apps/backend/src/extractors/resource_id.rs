use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// `{id}` path segment parsed as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub Uuid);

impl ResourceId {
    pub fn into_inner(self) -> Uuid {
        self.0
    }
}

impl FromRequest for ResourceId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = match req.match_info().get("id") {
            Some(raw) => Uuid::parse_str(raw)
                .map(ResourceId)
                .map_err(|_| AppError::bad_request(ErrorCode::InvalidId, "Invalid id")),
            None => Err(AppError::bad_request(ErrorCode::InvalidId, "Missing id")),
        };
        ready(parsed)
    }
}
