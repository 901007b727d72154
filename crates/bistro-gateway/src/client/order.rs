//! `POST /api/order`.

use crate::client::BistroClient;
use crate::error::HttpResult;
use crate::http::HttpBackend;
use crate::models::{OrderBody, OrderReplyWire};

const ORDER_PATH: &str = "api/order";

impl<B: HttpBackend> BistroClient<B> {
    /// Submit one transcript and email pair. Never retried.
    pub async fn post_order(&self, transcript: &str, email: &str) -> HttpResult<OrderReplyWire> {
        let url = self.endpoint(ORDER_PATH)?;
        let body = OrderBody { transcript, email };
        self.backend.post_json(&url, &body).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::BistroClient;
    use crate::error::HttpError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_post_order_sends_transcript_and_email() {
        let backend = FakeBackend::new().with_response(
            "/api/order",
            CannedResponse::Json(json!({"saved": true, "total": 90})),
        );
        let client = BistroClient::with_backend("http://127.0.0.1:5000", backend).unwrap();

        let reply = client
            .post_order("two coke", "guest@example.com")
            .await
            .unwrap();
        assert!(reply.saved);

        let requests = client.backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body,
            Some(json!({"transcript": "two coke", "email": "guest@example.com"}))
        );
    }

    #[tokio::test]
    async fn test_post_order_is_not_retried() {
        let backend =
            FakeBackend::new().with_response("/api/order", CannedResponse::Status(502));
        let client = BistroClient::with_backend("http://127.0.0.1:5000", backend).unwrap();

        let result = client.post_order("two coke", "guest@example.com").await;
        assert!(matches!(
            result,
            Err(HttpError::RequestFailed { status: 502, .. })
        ));
        assert_eq!(client.backend.requests().len(), 1);
    }
}
