//! Port trait implementations for `BistroClient`.
//!
//! Implements the core-owned `MenuSourcePort` and `OrderGatewayPort`,
//! converting between wire types and core DTOs.

use async_trait::async_trait;
use bistro_core::{
    GatewayError, MenuItem, MenuSourcePort, OrderGatewayPort, OrderLine, OrderRequest, OrderResult,
};

use crate::client::BistroClient;
use crate::error::HttpError;
use crate::http::HttpBackend;
use crate::models::{MenuItemWire, OrderReplyWire};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HttpError` to core `GatewayError`.
pub(crate) fn map_error(err: HttpError) -> GatewayError {
    match err {
        HttpError::RequestFailed { status, .. } => GatewayError::Status { status },
        HttpError::Timeout { .. } => GatewayError::Timeout,
        HttpError::ClientBuild(message) => GatewayError::Configuration { message },
        HttpError::Network(e) => GatewayError::Network {
            message: e.to_string(),
        },
        HttpError::InvalidUrl(e) => GatewayError::Configuration {
            message: e.to_string(),
        },
        HttpError::JsonParse(e) => GatewayError::MalformedResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_menu_item(item: MenuItemWire) -> MenuItem {
    MenuItem::new(item.name, item.price)
}

/// Convert an order reply, treating a blank `error` as absent.
fn to_order_result(reply: OrderReplyWire) -> OrderResult {
    OrderResult {
        saved: reply.saved,
        items: reply
            .items
            .into_iter()
            .map(|line| OrderLine {
                name: line.name,
                qty: line.qty,
                price: line.price,
            })
            .collect(),
        total: reply.total,
        email_sent: reply.email_sent,
        error: reply.error.filter(|message| !message.trim().is_empty()),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> MenuSourcePort for BistroClient<B> {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, GatewayError> {
        let items = self.fetch_menu_items().await.map_err(map_error)?;
        Ok(items.into_iter().map(to_menu_item).collect())
    }
}

#[async_trait]
impl<B: HttpBackend + Send + Sync> OrderGatewayPort for BistroClient<B> {
    async fn submit(&self, request: &OrderRequest) -> Result<OrderResult, GatewayError> {
        let reply = self
            .post_order(&request.transcript, &request.email)
            .await
            .map_err(map_error)?;
        let result = to_order_result(reply);
        tracing::debug!(
            saved = result.saved,
            items = result.items.len(),
            "Order reply received"
        );
        Ok(result)
    }
}
