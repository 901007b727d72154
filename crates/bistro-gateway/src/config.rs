//! Public configuration for the gateway client.

use std::time::Duration;

use bistro_core::{DEFAULT_SERVER_URL, DEFAULT_SUBMIT_TIMEOUT_SECS};

/// Configuration for the bistro gateway client.
///
/// # Example
///
/// ```
/// use bistro_gateway::GatewayConfig;
/// use std::time::Duration;
///
/// let config = GatewayConfig::new()
///     .with_base_url("http://192.168.1.20:5000")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server root; endpoint paths are resolved against it
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout, covering connect and body
    pub(crate) timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            user_agent: concat!("bistro-gateway/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(DEFAULT_SUBMIT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server root URL.
    ///
    /// Defaults to `http://127.0.0.1:5000`.
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

    /// Set the request timeout.
    ///
    /// Defaults to 15 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::new();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert!(config.user_agent.starts_with("bistro-gateway/"));
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GatewayConfig::new()
            .with_base_url("https://orders.example.com/bistro/")
            .with_user_agent("kiosk/2")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.base_url, "https://orders.example.com/bistro/");
        assert_eq!(config.user_agent, "kiosk/2");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
