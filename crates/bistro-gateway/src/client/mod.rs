//! Client for the order server.

mod menu;
mod order;

use url::Url;

use crate::config::GatewayConfig;
use crate::error::HttpResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultBistroClient = BistroClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the menu and order endpoints.
///
/// Generic over an HTTP backend so it can be tested against canned
/// responses. Use `DefaultBistroClient` in production code.
pub struct BistroClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultBistroClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, bistro_core::GatewayError> {
        Self::build(config).map_err(crate::port::map_error)
    }

    fn build(config: &GatewayConfig) -> HttpResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        tracing::debug!(base_url = %base_url, timeout = ?config.timeout, "Gateway client ready");
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> BistroClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, backend: B) -> HttpResult<Self> {
        Ok(Self {
            backend,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Resolve an endpoint path against the server root.
    pub(crate) fn endpoint(&self, path: &str) -> HttpResult<Url> {
        Ok(self.base_url.join(path)?)
    }
}

/// Parse the server root, making sure relative joins keep its path.
fn parse_base_url(raw: &str) -> HttpResult<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
