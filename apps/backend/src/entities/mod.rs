pub mod about;
pub mod contacts;
pub mod projects;
pub mod skills;
pub mod users;

pub use about::Entity as AboutEntries;
pub use about::Model as About;
pub use contacts::Entity as Contacts;
pub use contacts::Model as Contact;
pub use projects::Entity as Projects;
pub use projects::Model as Project;
pub use skills::Entity as Skills;
pub use skills::Model as Skill;
pub use users::Entity as Users;
pub use users::Model as User;
