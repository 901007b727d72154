//! Wire types for the order server.
//!
//! These types are internal to `bistro-gateway`. External consumers see the
//! core DTOs produced in `port.rs`.

use serde::{Deserialize, Serialize};

/// One entry of `GET /api/menu`.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemWire {
    pub name: String,
    pub price: f64,
}

/// Body of `POST /api/order`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBody<'a> {
    pub transcript: &'a str,
    pub email: &'a str,
}

/// Reply of `POST /api/order`.
///
/// Every field is defaulted: a reply that omits `saved` is treated as not
/// saved rather than as malformed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderReplyWire {
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub items: Vec<OrderLineWire>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// One parsed line inside an order reply.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineWire {
    pub name: String,
    #[serde(default = "default_qty")]
    pub qty: u32,
    #[serde(default)]
    pub price: f64,
}

const fn default_qty() -> u32 {
    1
}
