//! Voice adapter error types.

/// Errors raised by speech backends.
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    /// The platform offers no speech recognition.
    #[error("Speech recognition is not available on this platform")]
    RecognitionUnavailable,

    /// The recognizer refused to start; carries the engine's error code.
    #[error("Recognizer failed to start: {0}")]
    RecognizerStart(String),

    /// The synthesizer failed to speak an utterance.
    #[error("Speech synthesis failed: {0}")]
    SynthesisError(String),

    /// Terminal output error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VoiceError {
    /// Short code surfaced to the user as `Mic error: {code}`.
    pub fn code(&self) -> String {
        match self {
            Self::RecognitionUnavailable => "not-supported".to_string(),
            Self::RecognizerStart(code) => code.clone(),
            Self::SynthesisError(_) | Self::Io(_) => "audio-capture".to_string(),
        }
    }
}
