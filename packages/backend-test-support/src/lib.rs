//! Backend test support utilities
//!
//! Shared helpers for the backend's unit and integration tests: one-time
//! test logging, error-body assertions and unique test data.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;
