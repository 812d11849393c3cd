//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod about;
pub mod contacts;
pub mod projects;
pub mod skills;
pub mod users;
