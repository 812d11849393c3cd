//! Token helpers for tests

use std::time::{Duration, SystemTime};

use backend::auth::jwt::mint_access_token;
use backend::state::security_config::SecurityConfig;

/// Mint a bearer token (without the "Bearer " prefix)
pub fn mint_test_token(user_id: &str, role: &str, sec: &SecurityConfig) -> String {
    mint_access_token(user_id, role, SystemTime::now(), sec)
        .expect("should mint token successfully")
}

/// Full Authorization header value including the "Bearer " prefix
pub fn bearer_header(user_id: &str, role: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(user_id, role, sec))
}

/// Token issued eight days ago, one day past its lifetime
pub fn mint_expired_token(user_id: &str, role: &str, sec: &SecurityConfig) -> String {
    let past_time = SystemTime::now()
        .checked_sub(Duration::from_secs(8 * 24 * 60 * 60))
        .unwrap();
    mint_access_token(user_id, role, past_time, sec)
        .expect("should mint expired token successfully")
}

pub fn admin_header(sec: &SecurityConfig) -> (&'static str, String) {
    ("Authorization", bearer_header("u1", "admin", sec))
}

pub fn user_header(sec: &SecurityConfig) -> (&'static str, String) {
    ("Authorization", bearer_header("u2", "user", sec))
}
