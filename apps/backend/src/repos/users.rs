//! User repository functions.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::users_sea as users_adapter;
use crate::errors::domain::{ConflictKind, DomainError};

pub use users_adapter::UserCreate;

/// User domain model. Carries the hash so login can check it; never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_username(conn, username).await?;
    Ok(user.map(User::from))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<User, DomainError> {
    if users_adapter::find_by_username(conn, &dto.username)
        .await?
        .is_some()
    {
        return Err(DomainError::conflict(
            ConflictKind::UsernameTaken,
            format!("Username '{}' is already taken", dto.username),
        ));
    }
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            role: model.role,
        }
    }
}
