//! Speech ports: prompt playback and spoken-order capture.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::TranscriptCapture;
use crate::error::SessionError;

/// Speaks a prompt and resolves when playback is over.
#[async_trait]
pub trait SpeechPromptPort: Send + Sync {
    /// Speak `text`.
    ///
    /// The returned future resolves exactly once, including when no voice
    /// is available or the engine is blocked (then immediately, with
    /// [`SessionError::SynthesisFailure`]). Callers proceed either way.
    async fn speak(&self, text: &str) -> Result<(), SessionError>;
}

/// Events produced by one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// The running transcript changed.
    TranscriptUpdate(String),

    /// The recognizer reported an error code, verbatim.
    Error(String),

    /// End of capture. Always the last event, even after an error.
    Complete(TranscriptCapture),
}

/// Receiving side of one capture.
pub type CaptureStream = mpsc::UnboundedReceiver<CaptureEvent>;

/// Errors starting a capture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenError {
    /// The platform has no speech recognition capability.
    #[error("Speech recognition is not available")]
    CapabilityUnavailable,

    /// The recognizer exists but refused to start (e.g. microphone busy).
    #[error("Failed to start recognition: {0}")]
    StartFailed(String),
}

/// Captures one spoken utterance at a time.
pub trait ListeningPort: Send + Sync {
    /// Start a new capture, discarding any unfinished prior one.
    fn start(&self) -> Result<CaptureStream, ListenError>;

    /// Discard further events of the active capture, if any.
    fn cancel(&self) {}
}
