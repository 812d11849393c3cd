use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::auth::gate::AdminUser;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::DomainError;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::logging::pii::Redacted;
use crate::repos::contacts::{self, ContactCreate};
use crate::routes::{db_context, non_blank};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReadRequest {
    pub read: bool,
}

/// Public contact form submission.
async fn submit_contact(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ContactRequest>,
) -> Result<HttpResponse, AppError> {
    let ContactRequest {
        name,
        email,
        message,
    } = body.into_inner();
    let (Some(name), Some(email), Some(message)) =
        (non_blank(name), non_blank(email), non_blank(message))
    else {
        return Err(
            DomainError::missing_fields("Name, email, and message are required").into(),
        );
    };

    info!(email = %Redacted(&email), "contact message received");

    let contact = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            contacts::create(
                txn,
                ContactCreate {
                    name,
                    email,
                    message,
                },
            )
            .await
            .map_err(db_context("Failed to submit contact message"))
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(contact))
}

async fn list_contacts(
    _admin: AdminUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let contacts = contacts::list(db)
        .await
        .map_err(db_context("Failed to fetch contact messages"))?;
    Ok(HttpResponse::Ok().json(contacts))
}

async fn mark_contact(
    _admin: AdminUser,
    id: ResourceId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ReadRequest>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let read = body.read;

    let contact = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            contacts::mark_read(txn, id, read)
                .await
                .map_err(db_context("Failed to update contact message"))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(contact))
}

async fn delete_contact(
    _admin: AdminUser,
    id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            contacts::delete(txn, id)
                .await
                .map_err(db_context("Failed to delete contact message"))
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Contact message deleted" })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(submit_contact))
            .route(web::get().to(list_contacts)),
    )
    .service(
        web::resource("/{id}")
            .route(web::put().to(mark_contact))
            .route(web::delete().to(delete_contact)),
    );
}
