//! DTOs for contacts_sea adapter.

#[derive(Debug, Clone)]
pub struct ContactCreate {
    pub name: String,
    pub email: String,
    pub message: String,
}
