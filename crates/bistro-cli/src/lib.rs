//! Terminal front end for the bistro voice ordering flow.
//!
//! `main.rs` parses arguments and dispatches; [`bootstrap`] is the
//! composition root wiring the gateway, voice adapters and terminal
//! presentation into a session driver.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, OrderSessionParts, bootstrap};
pub use commands::{Commands, OrderArgs, ServerArgs};
pub use error::CliError;
pub use parser::Cli;
