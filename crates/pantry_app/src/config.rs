use std::env;

/// Environment variable naming the recommendation service base URL.
pub const API_URL_ENV: &str = "PANTRY_API_URL";

/// Base URL used when the environment does not provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The one configurable option: where the recommendation service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read the base URL from the environment, once, at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(env::var(API_URL_ENV).ok())
    }

    fn from_lookup(value: Option<String>) -> Self {
        let base_url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}
