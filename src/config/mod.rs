//! Configuration module for the IdHub console client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the IdHub REST backend
    pub base_url: String,
    /// Path where the session token is persisted between runs
    pub token_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("IDHUB_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string());

        let token_path = env::var("IDHUB_TOKEN_PATH")
            .unwrap_or_else(|_| "./data/session.token".to_string())
            .into();

        let log_level = env::var("IDHUB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            base_url,
            token_path,
            log_level,
        }
    }

    /// Configuration pointing at an explicit backend, for embedding and tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_path: PathBuf::from("./data/session.token"),
            log_level: "info".to_string(),
        }
    }
}
