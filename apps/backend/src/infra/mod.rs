//! Infrastructure layer - database connections and state assembly.

pub mod db;
pub mod state;
