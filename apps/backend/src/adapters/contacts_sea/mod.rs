//! SeaORM adapter for contact messages.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::contacts;

pub mod dto;

pub use dto::ContactCreate;

pub async fn list_newest_first<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<contacts::Model>, sea_orm::DbErr> {
    contacts::Entity::find()
        .order_by_desc(contacts::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<contacts::Model>, sea_orm::DbErr> {
    contacts::Entity::find_by_id(id).one(conn).await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ContactCreate,
) -> Result<contacts::Model, sea_orm::DbErr> {
    let active = contacts::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(dto.name),
        email: Set(dto.email),
        message: Set(dto.message),
        read: Set(false),
        created_at: Set(OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

pub async fn set_read<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    existing: contacts::Model,
    read: bool,
) -> Result<contacts::Model, sea_orm::DbErr> {
    let mut active: contacts::ActiveModel = existing.into();
    active.read = Set(read);
    active.update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<DeleteResult, sea_orm::DbErr> {
    contacts::Entity::delete_by_id(id).exec(conn).await
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    contacts::Entity::find().count(conn).await
}

pub async fn count_unread<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    contacts::Entity::find()
        .filter(contacts::Column::Read.eq(false))
        .count(conn)
        .await
}
