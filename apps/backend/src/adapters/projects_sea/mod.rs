//! SeaORM adapter for projects.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use serde_json::json;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::projects;

pub mod dto;

pub use dto::{ProjectCreate, ProjectUpdate};

pub async fn list_ordered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<projects::Model>, sea_orm::DbErr> {
    projects::Entity::find()
        .order_by_asc(projects::Column::SortOrder)
        .order_by_desc(projects::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<projects::Model>, sea_orm::DbErr> {
    projects::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProjectCreate,
) -> Result<projects::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = projects::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(dto.title),
        description: Set(dto.description),
        image: Set(dto.image),
        technologies: Set(json!(dto.technologies)),
        github_url: Set(dto.github_url),
        live_url: Set(dto.live_url),
        featured: Set(dto.featured),
        sort_order: Set(dto.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    existing: projects::Model,
    dto: ProjectUpdate,
) -> Result<projects::Model, sea_orm::DbErr> {
    let mut active: projects::ActiveModel = existing.into();
    if let Some(title) = dto.title {
        active.title = Set(title);
    }
    if let Some(description) = dto.description {
        active.description = Set(description);
    }
    if let Some(image) = dto.image {
        active.image = Set(image);
    }
    if let Some(technologies) = dto.technologies {
        active.technologies = Set(json!(technologies));
    }
    if let Some(github_url) = dto.github_url {
        active.github_url = Set(github_url);
    }
    if let Some(live_url) = dto.live_url {
        active.live_url = Set(live_url);
    }
    if let Some(featured) = dto.featured {
        active.featured = Set(featured);
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
    projects::Entity::delete_by_id(id).exec(conn).await
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    projects::Entity::find().count(conn).await
}
