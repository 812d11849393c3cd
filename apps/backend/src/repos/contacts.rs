//! Contact message repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::contacts_sea as contacts_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use contacts_adapter::ContactCreate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Contact>, DomainError> {
    let rows = contacts_adapter::list_newest_first(conn).await?;
    Ok(rows.into_iter().map(Contact::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ContactCreate,
) -> Result<Contact, DomainError> {
    let model = contacts_adapter::create(conn, dto).await?;
    Ok(Contact::from(model))
}

pub async fn mark_read<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    read: bool,
) -> Result<Contact, DomainError> {
    let existing = contacts_adapter::find_by_id(conn, id)
        .await?
        .ok_or(DomainError::not_found(NotFoundKind::Contact))?;
    let model = contacts_adapter::set_read(conn, existing, read).await?;
    Ok(Contact::from(model))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<(), DomainError> {
    let result = contacts_adapter::delete_by_id(conn, id).await?;
    if result.rows_affected == 0 {
        return Err(DomainError::not_found(NotFoundKind::Contact));
    }
    Ok(())
}

/// (total, unread)
pub async fn counts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<(u64, u64), DomainError> {
    let total = contacts_adapter::count(conn).await?;
    let unread = contacts_adapter::count_unread(conn).await?;
    Ok((total, unread))
}

impl From<crate::entities::contacts::Model> for Contact {
    fn from(model: crate::entities::contacts::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            message: model.message,
            read: model.read,
            created_at: model.created_at,
        }
    }
}
