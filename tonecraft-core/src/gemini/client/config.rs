use crate::config::constants::{defaults, urls};
use crate::config::core::ApiConfig;
use std::time::Duration;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Generative Language API, without trailing slash
    pub base_url: String,
    /// Maximum number of idle connections per host
    pub pool_max_idle_per_host: usize,
    /// How long to keep idle connections alive
    pub pool_idle_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: urls::GEMINI_API_BASE.to_string(),
            // One request per interaction, so a single pooled connection is plenty
            pool_max_idle_per_host: 1,
            pool_idle_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(defaults::DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: defaults::USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build from the `[api]` section of `tonecraft.toml`
    pub fn from_api_config(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(api.request_timeout_secs),
            connect_timeout: Duration::from_secs(api.connect_timeout_secs),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
