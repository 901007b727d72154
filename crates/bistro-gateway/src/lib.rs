//! HTTP adapter for the bistro order server.
//!
//! Implements the core-owned [`MenuSourcePort`](bistro_core::MenuSourcePort)
//! and [`OrderGatewayPort`](bistro_core::OrderGatewayPort) against
//! `GET /api/menu` and `POST /api/order`. Wire types and transport errors
//! stay internal; callers only ever see core DTOs and `GatewayError`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultBistroClient is meant to be used through the core port traits,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultBistroClient;

// Configuration
pub use config::GatewayConfig;
