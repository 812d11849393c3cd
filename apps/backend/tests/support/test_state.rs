use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::AppError;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

/// Fresh, migrated in-memory database per call
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_db(DbProfile::InMemory)
        .with_security(test_security())
        .build()
        .await
}

/// State with no database attached
pub async fn build_state_without_db() -> Result<AppState, AppError> {
    build_state().with_security(test_security()).build().await
}
