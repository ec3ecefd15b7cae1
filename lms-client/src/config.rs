//! Client configuration

use std::env;

/// Default backend address, same as the development server
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT: u64 = 5;

/// Client configuration for connecting to the LMS backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read configuration from `LMS_API_BASE_URL` / `LMS_API_TIMEOUT`
    ///
    /// Binaries are expected to load a dotenv file first. Missing or
    /// unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            env::var("LMS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = env::var("LMS_API_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT);
        Self::new(base_url).with_timeout(timeout)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, 5);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://lms.example.edu/");
        assert_eq!(config.base_url, "https://lms.example.edu");
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://localhost:5000")
            .with_token("jwt")
            .with_timeout(30);
        assert_eq!(config.token.as_deref(), Some("jwt"));
        assert_eq!(config.timeout, 30);
    }
}
