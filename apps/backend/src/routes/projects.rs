use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::auth::gate::AdminUser;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::DomainError;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::repos::projects::{self, split_technologies, ProjectCreate, ProjectUpdate};
use crate::routes::{db_context, non_blank};
use crate::state::app_state::AppState;

/// The admin form sends a comma-separated string; API clients send a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Technologies {
    List(Vec<String>),
    Csv(String),
}

impl Technologies {
    fn into_vec(self) -> Vec<String> {
        match self {
            Technologies::List(items) => items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Technologies::Csv(raw) => split_technologies(&raw),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Technologies>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

impl ProjectRequest {
    fn into_create(self) -> Result<ProjectCreate, DomainError> {
        let (Some(title), Some(description), Some(github_url)) = (
            non_blank(self.title),
            non_blank(self.description),
            non_blank(self.github_url),
        ) else {
            return Err(DomainError::missing_fields("Missing required fields"));
        };

        Ok(ProjectCreate {
            title,
            description,
            image: non_blank(self.image),
            technologies: self
                .technologies
                .map(Technologies::into_vec)
                .unwrap_or_default(),
            github_url,
            live_url: non_blank(self.live_url),
            featured: self.featured.unwrap_or(false),
            sort_order: self.order.unwrap_or(0),
        })
    }
}

/// Partial update. `image` and `liveUrl` distinguish "absent" from an
/// explicit `null`, which clears the column.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image: Option<Option<String>>,
    pub technologies: Option<Technologies>,
    pub github_url: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub live_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

impl From<ProjectPatch> for ProjectUpdate {
    fn from(patch: ProjectPatch) -> Self {
        ProjectUpdate {
            title: non_blank(patch.title),
            description: non_blank(patch.description),
            image: patch.image.map(non_blank),
            technologies: patch.technologies.map(Technologies::into_vec),
            github_url: non_blank(patch.github_url),
            live_url: patch.live_url.map(non_blank),
            featured: patch.featured,
            sort_order: patch.order,
        }
    }
}

async fn list_projects(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let projects = projects::list(db)
        .await
        .map_err(db_context("Failed to fetch projects"))?;
    Ok(HttpResponse::Ok().json(projects))
}

async fn get_project(
    id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let project = projects::get(db, id.into_inner())
        .await
        .map_err(db_context("Failed to fetch project"))?;
    Ok(HttpResponse::Ok().json(project))
}

async fn create_project(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let dto = body.into_inner().into_create()?;

    let project = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            projects::create(txn, dto)
                .await
                .map_err(db_context("Failed to create project"))
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(project))
}

async fn update_project(
    _admin: AdminUser,
    id: ResourceId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ProjectPatch>,
) -> Result<HttpResponse, AppError> {
    let dto = ProjectUpdate::from(body.into_inner());
    let id = id.into_inner();

    let project = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            projects::update(txn, id, dto)
                .await
                .map_err(db_context("Failed to update project"))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(project))
}

async fn delete_project(
    _admin: AdminUser,
    id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            projects::delete(txn, id)
                .await
                .map_err(db_context("Failed to delete project"))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Project deleted" })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_projects))
            .route(web::post().to(create_project)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_project))
            .route(web::put().to(update_project))
            .route(web::delete().to(delete_project)),
    );
}
