//! DTOs for projects_sea adapter.

#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
}

/// Partial update. For nullable columns the outer `Option` says whether the
/// field was sent, the inner one whether it is being cleared.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
}
