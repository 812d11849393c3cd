use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::auth::gate::AdminUser;
use crate::db::require_db;
use crate::error::AppError;
use crate::repos::{contacts, projects, skills};
use crate::routes::db_context;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub projects: u64,
    pub skills: u64,
    pub contacts: u64,
    pub unread_contacts: u64,
}

/// Content counts for the admin landing page.
async fn dashboard(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let ctx = db_context("Failed to load dashboard");

    let projects = projects::count(db).await.map_err(&ctx)?;
    let skills = skills::count(db).await.map_err(&ctx)?;
    let (contacts, unread_contacts) = contacts::counts(db).await.map_err(&ctx)?;

    Ok(HttpResponse::Ok().json(DashboardResponse {
        projects,
        skills,
        contacts,
        unread_contacts,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(dashboard));
}
