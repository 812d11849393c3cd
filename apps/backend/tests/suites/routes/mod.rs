mod about;
mod admin;
mod health;
mod skills;
