//! Application configuration from environment variables
//!
//! The binary loads `.env` via dotenvy before calling [`AppConfig::from_env`];
//! this module only reads the process environment.

use thiserror::Error;

/// Default database name when `MONGODB_DB` is unset.
const DEFAULT_DB_NAME: &str = "sponsorlink";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{var} is empty")]
    Empty { var: &'static str },
}

/// Process-wide configuration, built once by the composition root and
/// handed to the server explicitly (no global state).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string.
    pub database_url: String,
    /// Database name within the cluster.
    pub database_name: String,
    /// API key for the generative-model service.
    pub gemini_api_key: String,
    /// Secret used to sign and verify session tokens.
    pub session_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("MONGODB_URI")?,
            database_name: std::env::var("MONGODB_DB")
                .unwrap_or_else(|_| DEFAULT_DB_NAME.to_string()),
            gemini_api_key: required("GEMINI_API_KEY")?,
            session_secret: required("SESSION_SECRET")?,
        })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    let value = std::env::var(var).map_err(|_| ConfigError::Missing(var))?;
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(value)
}
