//! Session error taxonomy.
//!
//! Every failure the ordering flow can meet resolves to one of these
//! variants, and every variant resolves to a user-visible status message via
//! [`SessionError::user_message`]. None of them escape the session as faults.

use thiserror::Error;

use crate::ports::GatewayError;

/// Local validation failures that block a submission before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No finalized, non-blank transcript is available.
    #[error("transcript is empty")]
    EmptyTranscript,

    /// The email input is blank.
    #[error("email is empty")]
    EmptyEmail,
}

/// Errors surfaced by the order session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The platform has no speech recognition. Fatal to the current attempt.
    #[error("Speech recognition is not available")]
    CapabilityUnavailable,

    /// Speech synthesis was blocked or failed. Recovered silently.
    #[error("Speech synthesis failed: {0}")]
    SynthesisFailure(String),

    /// The recognizer reported an error code (permission, network, no mic).
    #[error("Recognition error: {0}")]
    RecognitionError(String),

    /// Submission blocked locally.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Request rejected, timed out, or the body was malformed.
    #[error(transparent)]
    Transport(#[from] GatewayError),

    /// The server answered with `saved = false`.
    #[error("Order rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    ServerRejection(Option<String>),
}

impl SessionError {
    /// Status text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::CapabilityUnavailable => {
                "Speech recognition is not supported on this platform. Press Start to try again."
                    .to_string()
            }
            Self::SynthesisFailure(_) => "Continuing without audio.".to_string(),
            Self::RecognitionError(code) => {
                let code = if code.trim().is_empty() { "unknown" } else { code };
                format!("Mic error: {code}")
            }
            Self::Validation(ValidationError::EmptyTranscript) => {
                "Please speak your order first. Click Start.".to_string()
            }
            Self::Validation(ValidationError::EmptyEmail) => "Please enter your email.".to_string(),
            Self::Transport(_) => "Error placing order.".to_string(),
            Self::ServerRejection(message) => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or("No items detected. Please try again.")
                .to_string(),
        }
    }

    /// Whether this failure ends the current attempt.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::CapabilityUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_capability_errors_are_fatal() {
        assert!(SessionError::CapabilityUnavailable.is_fatal());
        assert!(!SessionError::RecognitionError("not-allowed".into()).is_fatal());
        assert!(!SessionError::ServerRejection(None).is_fatal());
    }

    #[test]
    fn recognition_error_code_is_shown_verbatim() {
        let err = SessionError::RecognitionError("not-allowed".to_string());
        assert_eq!(err.user_message(), "Mic error: not-allowed");

        let blank = SessionError::RecognitionError(String::new());
        assert_eq!(blank.user_message(), "Mic error: unknown");
    }

    #[test]
    fn server_rejection_prefers_server_message() {
        let err = SessionError::ServerRejection(Some("no items detected".to_string()));
        assert_eq!(err.user_message(), "no items detected");

        let generic = SessionError::ServerRejection(Some("  ".to_string()));
        assert_eq!(generic.user_message(), "No items detected. Please try again.");
    }

    #[test]
    fn transport_failures_are_reported_generically() {
        let err = SessionError::from(GatewayError::Timeout);
        assert_eq!(err.user_message(), "Error placing order.");
    }
}
