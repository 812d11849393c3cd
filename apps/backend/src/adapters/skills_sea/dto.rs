//! DTOs for skills_sea adapter.

#[derive(Debug, Clone)]
pub struct SkillCreate {
    pub name: String,
    pub icon: String,
    pub level: i16,
    pub category: String,
    pub sort_order: i32,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct SkillUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub level: Option<i16>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
}
