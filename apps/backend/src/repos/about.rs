//! About repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::about_sea as about_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use about_adapter::AboutWrite;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub id: Uuid,
    pub bio: String,
    pub profile_image: String,
    pub resume_url: Option<String>,
    pub email: String,
    pub location: Option<String>,
    pub social_links: Option<Value>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Whether an upsert created the row or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

pub async fn get<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<About, DomainError> {
    about_adapter::find(conn)
        .await?
        .map(About::from)
        .ok_or(DomainError::not_found(NotFoundKind::About))
}

/// Replace the about record, creating it if none exists yet.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    write: AboutWrite,
) -> Result<(About, UpsertOutcome), DomainError> {
    let outcome = match about_adapter::find(conn).await? {
        Some(_) => UpsertOutcome::Updated,
        None => UpsertOutcome::Created,
    };
    let model = about_adapter::upsert(conn, write).await?;
    Ok((About::from(model), outcome))
}

impl From<crate::entities::about::Model> for About {
    fn from(model: crate::entities::about::Model) -> Self {
        Self {
            id: model.id,
            bio: model.bio,
            profile_image: model.profile_image,
            resume_url: model.resume_url,
            email: model.email,
            location: model.location,
            social_links: model.social_links,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
