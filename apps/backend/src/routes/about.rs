use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;

use crate::auth::gate::AdminUser;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::DomainError;
use crate::extractors::ValidatedJson;
use crate::repos::about::{self, AboutWrite, UpsertOutcome};
use crate::routes::{db_context, non_blank};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutRequest {
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub resume_url: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub social_links: Option<Value>,
}

impl AboutRequest {
    fn into_write(self) -> Result<AboutWrite, DomainError> {
        match (
            non_blank(self.bio),
            non_blank(self.profile_image),
            non_blank(self.email),
        ) {
            (Some(bio), Some(profile_image), Some(email)) => Ok(AboutWrite {
                bio,
                profile_image,
                resume_url: self.resume_url,
                email,
                location: self.location,
                social_links: self.social_links,
            }),
            _ => Err(DomainError::missing_fields("Missing required fields")),
        }
    }
}

async fn get_about(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let about = about::get(db)
        .await
        .map_err(db_context("Failed to fetch about information"))?;
    Ok(HttpResponse::Ok().json(about))
}

async fn upsert_about(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<AboutRequest>,
) -> Result<HttpResponse, AppError> {
    let write = body.into_inner().into_write()?;

    let (about, outcome) = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            about::upsert(txn, write)
                .await
                .map_err(db_context("Failed to update about information"))
        })
    })
    .await?;

    Ok(match outcome {
        UpsertOutcome::Created => HttpResponse::Created().json(about),
        UpsertOutcome::Updated => HttpResponse::Ok().json(about),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(get_about))
            .route(web::post().to(upsert_about)),
    );
}
