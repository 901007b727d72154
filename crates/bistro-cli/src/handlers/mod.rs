//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Route terminal input
//!   2. Drive the session or gateway built in bootstrap
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain ordering logic; that belongs to the session.

pub mod menu;
pub mod order;
