//! Public configuration for the OpenRouter client.

use std::time::Duration;

/// Configuration for the OpenRouter client.
///
/// # Example
///
/// ```
/// use routerchat_openrouter::OpenRouterConfig;
/// use std::time::Duration;
///
/// let config = OpenRouterConfig::new()
///     .with_chat_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// Base URL for the OpenRouter API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Timeout for catalog requests
    pub(crate) catalog_timeout: Duration,
    /// Timeout for non-streaming chat requests
    pub(crate) chat_timeout: Duration,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            user_agent: concat!("routerchat/", env!("CARGO_PKG_VERSION")).to_string(),
            catalog_timeout: Duration::from_secs(10),
            chat_timeout: Duration::from_secs(30),
        }
    }
}

impl OpenRouterConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the OpenRouter API.
    ///
    /// Defaults to `https://openrouter.ai/api/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the timeout for catalog requests.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_catalog_timeout(mut self, timeout: Duration) -> Self {
        self.catalog_timeout = timeout;
        self
    }

    /// Set the timeout for non-streaming chat requests.
    ///
    /// Defaults to 30 seconds. Streaming requests are not bounded by this:
    /// a relay may legitimately outlive any fixed total timeout.
    #[must_use]
    pub const fn with_chat_timeout(mut self, timeout: Duration) -> Self {
        self.chat_timeout = timeout;
        self
    }
}
