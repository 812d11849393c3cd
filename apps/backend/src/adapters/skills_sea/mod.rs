//! SeaORM adapter for skills.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::skills;

pub mod dto;

pub use dto::{SkillCreate, SkillUpdate};

pub async fn list_ordered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<skills::Model>, sea_orm::DbErr> {
    skills::Entity::find()
        .order_by_asc(skills::Column::SortOrder)
        .order_by_asc(skills::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<skills::Model>, sea_orm::DbErr> {
    skills::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SkillCreate,
) -> Result<skills::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = skills::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(dto.name),
        icon: Set(dto.icon),
        level: Set(dto.level),
        category: Set(dto.category),
        sort_order: Set(dto.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    existing: skills::Model,
    dto: SkillUpdate,
) -> Result<skills::Model, sea_orm::DbErr> {
    let mut active: skills::ActiveModel = existing.into();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(icon) = dto.icon {
        active.icon = Set(icon);
    }
    if let Some(level) = dto.level {
        active.level = Set(level);
    }
    if let Some(category) = dto.category {
        active.category = Set(category);
    }
    if let Some(sort_order) = dto.sort_order {
        active.sort_order = Set(sort_order);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<DeleteResult, sea_orm::DbErr> {
    skills::Entity::delete_by_id(id).exec(conn).await
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    skills::Entity::find().count(conn).await
}
