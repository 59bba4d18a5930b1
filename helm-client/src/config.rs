//! Client configuration

/// Client configuration for connecting to the permission service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g. "http://localhost:8000")
    pub base_url: String,

    /// Bearer token for authentication
    ///
    /// Sourced from the ambient auth session. When absent, requests go out
    /// unauthenticated and the backend rejects them; no special handling
    /// happens client-side.
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
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
        Self::new("http://localhost:8000")
    }
}
