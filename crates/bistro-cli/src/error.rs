//! CLI-specific error types and exit codes.

use bistro_core::{GatewayError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (terminal closed, broken pipe, ...).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal failure (task panicked, ...).
    #[error("{0}")]
    Internal(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Internal(_) => 1,
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Only client construction surfaces gateway errors here; request failures
/// are handled inside the session.
impl From<GatewayError> for CliError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Configuration { message } => Self::Config(message),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
