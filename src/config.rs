use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the shortening service, e.g. "https://api.example.com".
    /// Must NOT have a trailing slash.
    pub api_base_url: String,

    /// Path of the persisted-slot file holding the serialized link list.
    pub store_path: PathBuf,

    /// Per-request timeout for calls to the shortening service, in seconds.
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy
    /// before this is called).
    pub fn from_env() -> Result<Self> {
        let api_base_url = std::env::var("API_BASE_URL")
            .context("API_BASE_URL must be set in the environment or .env file")?
            .trim_end_matches('/')
            .to_owned();

        if api_base_url.is_empty() {
            anyhow::bail!("API_BASE_URL must not be empty");
        }

        let http_timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse::<u64>()
            .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            api_base_url,
            store_path: std::env::var("STORE_PATH")
                .unwrap_or_else(|_| "shawty.json".into())
                .into(),
            http_timeout_secs,
        })
    }
}
