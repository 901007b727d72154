//! HTTP backend abstraction for the order server.
//!
//! The trait allows the client to be exercised against canned responses in
//! tests. The production implementation uses reqwest and performs exactly
//! one attempt per call: retry is a user action, never a transport one.

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::GatewayConfig;
use crate::error::{HttpError, HttpResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the order server.
///
/// This is an implementation detail - external code should use the core
/// port traits.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL, bypassing any intermediate cache.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T>;

    /// Post a JSON body and deserialize the JSON reply.
    async fn post_json<Body: Serialize + Sync, T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &Body,
    ) -> HttpResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GatewayConfig) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Send a request and decode a successful JSON body.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> HttpResult<T> {
        let response = request.send().await.map_err(|e| classify(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| classify(e, url))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Separate timeouts from other transport failures.
fn classify(err: reqwest::Error, url: &Url) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout {
            url: url.to_string(),
        }
    } else {
        HttpError::Network(err)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HttpResult<T> {
        let request = self
            .client
            .get(url.as_str())
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        self.execute(request, url).await
    }

    async fn post_json<Body: Serialize + Sync, T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &Body,
    ) -> HttpResult<T> {
        let request = self.client.post(url.as_str()).json(body);
        self.execute(request, url).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(&GatewayConfig::default());
        assert!(backend.is_ok());
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_returns_canned_response() {
            let backend = FakeBackend::new().with_response(
                "/api/menu",
                CannedResponse::Json(json!([{"name": "Coke", "price": 45}])),
            );

            let url = Url::parse("http://127.0.0.1:5000/api/menu").unwrap();
            let result: serde_json::Value = backend.get_json(&url).await.unwrap();

            assert_eq!(result[0]["name"], "Coke");
            assert_eq!(backend.requests()[0].method, "GET");
        }

        #[tokio::test]
        async fn test_fake_backend_returns_404_for_unknown_url() {
            let backend = FakeBackend::new();
            let url = Url::parse("http://127.0.0.1:5000/unknown").unwrap();

            let result: HttpResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(
                result,
                Err(HttpError::RequestFailed { status: 404, .. })
            ));
        }

        #[tokio::test]
        async fn test_fake_backend_records_post_body() {
            let backend = FakeBackend::new()
                .with_response("/api/order", CannedResponse::Json(json!({"saved": false})));

            let url = Url::parse("http://127.0.0.1:5000/api/order").unwrap();
            let _: serde_json::Value = backend
                .post_json(&url, &json!({"transcript": "one coke"}))
                .await
                .unwrap();

            let requests = backend.requests();
            assert_eq!(requests[0].method, "POST");
            assert_eq!(
                requests[0].body.as_ref().unwrap()["transcript"],
                "one coke"
            );
        }
    }
}
