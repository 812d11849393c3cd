use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::auth::gate::AdminUser;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::DomainError;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::repos::skills::{self, SkillCreate, SkillUpdate, DEFAULT_CATEGORY};
use crate::routes::{db_context, non_blank};
use crate::state::app_state::AppState;

/// Body for both create and update; `order` maps to `sort_order`.
#[derive(Debug, Default, Deserialize)]
pub struct SkillRequest {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub level: Option<i64>,
    pub category: Option<String>,
    pub order: Option<i32>,
}

impl SkillRequest {
    /// A level of 0 counts as missing, any other out-of-range value is a
    /// range error.
    fn into_create(self) -> Result<SkillCreate, DomainError> {
        let level = self.level.filter(|l| *l != 0);
        let (Some(name), Some(icon), Some(level)) =
            (non_blank(self.name), non_blank(self.icon), level)
        else {
            return Err(DomainError::missing_fields("Missing required fields"));
        };

        Ok(SkillCreate {
            name,
            icon,
            level: skills::check_level(level)?,
            category: non_blank(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            sort_order: self.order.unwrap_or(0),
        })
    }

    fn into_update(self) -> Result<SkillUpdate, DomainError> {
        Ok(SkillUpdate {
            name: non_blank(self.name),
            icon: non_blank(self.icon),
            level: self.level.map(skills::check_level).transpose()?,
            category: non_blank(self.category),
            sort_order: self.order,
        })
    }
}

async fn list_skills(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let skills = skills::list(db)
        .await
        .map_err(db_context("Failed to fetch skills"))?;
    Ok(HttpResponse::Ok().json(skills))
}

async fn create_skill(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<SkillRequest>,
) -> Result<HttpResponse, AppError> {
    let dto = body.into_inner().into_create()?;

    let skill = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            skills::create(txn, dto)
                .await
                .map_err(db_context("Failed to create skill"))
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(skill))
}

async fn update_skill(
    _admin: AdminUser,
    id: ResourceId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<SkillRequest>,
) -> Result<HttpResponse, AppError> {
    let dto = body.into_inner().into_update()?;
    let id = id.into_inner();

    let skill = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            skills::update(txn, id, dto)
                .await
                .map_err(db_context("Failed to update skill"))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(skill))
}

async fn delete_skill(
    _admin: AdminUser,
    id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            skills::delete(txn, id)
                .await
                .map_err(db_context("Failed to delete skill"))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Skill deleted" })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_skills))
            .route(web::post().to(create_skill)),
    )
    .service(
        web::resource("/{id}")
            .route(web::put().to(update_skill))
            .route(web::delete().to(delete_skill)),
    );
}
