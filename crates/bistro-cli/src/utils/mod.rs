//! Shared helpers for interactive commands.

pub mod input;
