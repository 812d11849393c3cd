//! SeaORM adapter for the single about record.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, EntityTrait, Set};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::about;

pub mod dto;

pub use dto::AboutWrite;

/// Primary key of the about row. Every write targets it, so the table holds
/// at most one record even under concurrent first writes.
pub const ABOUT_ID: Uuid = Uuid::from_u128(1);

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<about::Model>, sea_orm::DbErr> {
    about::Entity::find_by_id(ABOUT_ID).one(conn).await
}

/// Insert the row, or replace every field but `created_at` if it exists.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AboutWrite,
) -> Result<about::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = about::ActiveModel {
        id: Set(ABOUT_ID),
        bio: Set(dto.bio),
        profile_image: Set(dto.profile_image),
        resume_url: Set(dto.resume_url),
        email: Set(dto.email),
        location: Set(dto.location),
        social_links: Set(dto.social_links),
        created_at: Set(now),
        updated_at: Set(now),
    };

    about::Entity::insert(active)
        .on_conflict(
            OnConflict::column(about::Column::Id)
                .update_columns([
                    about::Column::Bio,
                    about::Column::ProfileImage,
                    about::Column::ResumeUrl,
                    about::Column::Email,
                    about::Column::Location,
                    about::Column::SocialLinks,
                    about::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(conn)
        .await
}
