// src/config.rs
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Endpoint settings for the product API client.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Reads `PRODUCT_API_URL` and `PRODUCT_API_TIMEOUT_SECS`, falling back
    /// to defaults when unset or unparseable.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PRODUCT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = std::env::var("PRODUCT_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        // Trailing slashes would double up when joining paths
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, timeout }
    }
}
