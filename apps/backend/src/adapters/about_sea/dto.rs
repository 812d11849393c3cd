//! DTOs for about_sea adapter.

use sea_orm::prelude::Json;

/// Full set of about fields; used for both insert and overwrite.
#[derive(Debug, Clone)]
pub struct AboutWrite {
    pub bio: String,
    pub profile_image: String,
    pub resume_url: Option<String>,
    pub email: String,
    pub location: Option<String>,
    pub social_links: Option<Json>,
}
