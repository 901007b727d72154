//! Order gateway port: the network boundary for order submission.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{OrderRequest, OrderResult};

/// Transport-level failures talking to the order endpoints.
///
/// A response with `saved = false` is NOT an error; it is returned as an
/// ordinary [`OrderResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Connection refused, DNS failure, reset, etc.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success HTTP status.
    #[error("Server returned HTTP {status}")]
    Status { status: u16 },

    /// The response body could not be decoded.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// The adapter is misconfigured (bad base URL, client build failure).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Submits a transcript and email pair and returns the structured outcome.
///
/// The gateway never retries; retry is a user action.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderGatewayPort: Send + Sync {
    /// Submit one order attempt.
    async fn submit(&self, request: &OrderRequest) -> Result<OrderResult, GatewayError>;
}
