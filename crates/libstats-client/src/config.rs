//! Client configuration.

use std::time::Duration;

/// Default request timeout.
///
/// Remote calls fail fast instead of hanging the request that issued them.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Default `content-type` header sent with every request.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, covering connect, send and body read.
    pub timeout: Duration,

    /// Value of the `content-type` header.
    pub content_type: String,

    /// Value of the `user-agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new client configuration with defaults.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            user_agent: format!("libstats/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `content-type` header.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the `user-agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
