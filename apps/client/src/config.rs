use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote resume backend.
    pub backend_base_url: String,
    /// Path of the durable key/value store file for the daily caches.
    pub store_path: String,
    pub http_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            backend_base_url: require_env("BACKEND_BASE_URL")?,
            store_path: std::env::var("STORE_PATH")
                .unwrap_or_else(|_| "resume_client_store.json".to_string()),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
