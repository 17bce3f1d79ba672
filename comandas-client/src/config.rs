//! Client configuration

use crate::error::ClientResult;
use crate::http::HttpClient;

/// Default BFF base URL (the proxy's local development address).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Client configuration for connecting to the Comandas BFF
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// BFF base URL (e.g. "http://localhost:5000/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Load the configuration from `COMANDAS_BASE_URL` and
    /// `COMANDAS_TIMEOUT` (reading a `.env` file when present),
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("COMANDAS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var("COMANDAS_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self { base_url, timeout }
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
