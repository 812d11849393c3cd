//! SeaORM adapters. Functions here return `DbErr`; repos map to `DomainError`.

pub mod about_sea;
pub mod contacts_sea;
pub mod projects_sea;
pub mod skills_sea;
pub mod users_sea;
