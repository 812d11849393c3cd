//! Skill repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::skills_sea as skills_adapter;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

pub use skills_adapter::{SkillCreate, SkillUpdate};

pub const MIN_LEVEL: i16 = 1;
pub const MAX_LEVEL: i16 = 5;
pub const DEFAULT_CATEGORY: &str = "other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    pub level: i16,
    pub category: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

pub fn check_level(level: i64) -> Result<i16, DomainError> {
    if (i64::from(MIN_LEVEL)..=i64::from(MAX_LEVEL)).contains(&level) {
        Ok(level as i16)
    } else {
        Err(DomainError::Validation(ValidationKind::SkillLevelOutOfRange))
    }
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Skill>, DomainError> {
    let rows = skills_adapter::list_ordered(conn).await?;
    Ok(rows.into_iter().map(Skill::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SkillCreate,
) -> Result<Skill, DomainError> {
    check_level(i64::from(dto.level))?;
    let model = skills_adapter::create(conn, dto).await?;
    Ok(Skill::from(model))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    dto: SkillUpdate,
) -> Result<Skill, DomainError> {
    if let Some(level) = dto.level {
        check_level(i64::from(level))?;
    }
    let existing = skills_adapter::find_by_id(conn, id)
        .await?
        .ok_or(DomainError::not_found(NotFoundKind::Skill))?;
    let model = skills_adapter::update(conn, existing, dto).await?;
    Ok(Skill::from(model))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<(), DomainError> {
    let result = skills_adapter::delete_by_id(conn, id).await?;
    if result.rows_affected == 0 {
        return Err(DomainError::not_found(NotFoundKind::Skill));
    }
    Ok(())
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(skills_adapter::count(conn).await?)
}

impl From<crate::entities::skills::Model> for Skill {
    fn from(model: crate::entities::skills::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            icon: model.icon,
            level: model.level,
            category: model.category,
            sort_order: model.sort_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
