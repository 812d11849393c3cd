pub mod admin_user;
pub mod current_user;
pub mod resource_id;
pub mod validated_json;

pub use resource_id::ResourceId;
pub use validated_json::ValidatedJson;
