//! Project repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::projects_sea as projects_adapter;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

pub use projects_adapter::{ProjectCreate, ProjectUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: Option<String>,
    pub featured: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Project>, DomainError> {
    projects_adapter::list_ordered(conn)
        .await?
        .into_iter()
        .map(Project::try_from)
        .collect()
}

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Project, DomainError> {
    projects_adapter::find_by_id(conn, id)
        .await?
        .ok_or(DomainError::not_found(NotFoundKind::Project))
        .and_then(Project::try_from)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProjectCreate,
) -> Result<Project, DomainError> {
    let model = projects_adapter::create(conn, dto).await?;
    Project::try_from(model)
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    dto: ProjectUpdate,
) -> Result<Project, DomainError> {
    let existing = projects_adapter::find_by_id(conn, id)
        .await?
        .ok_or(DomainError::not_found(NotFoundKind::Project))?;
    let model = projects_adapter::update(conn, existing, dto).await?;
    Project::try_from(model)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<(), DomainError> {
    let result = projects_adapter::delete_by_id(conn, id).await?;
    if result.rows_affected == 0 {
        return Err(DomainError::not_found(NotFoundKind::Project));
    }
    Ok(())
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(projects_adapter::count(conn).await?)
}

/// Split a comma-separated technology list, dropping blanks.
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl TryFrom<crate::entities::projects::Model> for Project {
    type Error = DomainError;

    fn try_from(model: crate::entities::projects::Model) -> Result<Self, Self::Error> {
        let technologies = match model.technologies {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(other),
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(|other| {
                    DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!("project {} has non-string technology {other}", model.id),
                    )
                })?,
            Value::Null => Vec::new(),
            other => {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("project {} technologies is not an array: {other}", model.id),
                ))
            }
        };

        Ok(Self {
            id: model.id,
            title: model.title,
            description: model.description,
            image: model.image,
            technologies,
            github_url: model.github_url,
            live_url: model.live_url,
            featured: model.featured,
            sort_order: model.sort_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
