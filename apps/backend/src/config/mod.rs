pub mod db;

use std::env;

use crate::error::AppError;

/// Deployment environment, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Dev,
    Test,
}

impl RuntimeEnv {
    /// Missing or empty `APP_ENV` means `Dev`. Names match case-insensitively;
    /// anything unrecognised is a configuration error so a misspelt
    /// production setting never runs with development defaults.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("APP_ENV") {
            Ok(raw) => Self::parse(&raw),
            Err(env::VarError::NotPresent) => Ok(RuntimeEnv::Dev),
            Err(env::VarError::NotUnicode(_)) => {
                Err(AppError::config("APP_ENV is not valid unicode"))
            }
        }
    }

    fn parse(raw: &str) -> Result<Self, AppError> {
        let value = raw.trim();
        if value.is_empty() {
            return Ok(RuntimeEnv::Dev);
        }

        let is = |name: &str| value.eq_ignore_ascii_case(name);
        if is("prod") || is("production") {
            Ok(RuntimeEnv::Prod)
        } else if is("dev") || is("development") {
            Ok(RuntimeEnv::Dev)
        } else if is("test") {
            Ok(RuntimeEnv::Test)
        } else {
            Err(AppError::config(format!(
                "unrecognised APP_ENV '{value}'; expected prod, dev or test"
            )))
        }
    }

    pub fn is_prod(self) -> bool {
        self == RuntimeEnv::Prod
    }
}
