//! SeaORM adapter for user accounts.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::users;

pub mod dto;

pub use dto::UserCreate;

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(dto.username),
        password_hash: Set(dto.password_hash),
        role: Set(dto.role),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}
