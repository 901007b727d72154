use crate::domain::{MenuItem, OrderResult, TranscriptCapture};
use crate::ports::GatewayError;
use crate::session::Generation;

/// Inputs to the order session.
///
/// `Start` and `Confirm` come from the user. Every other variant is the
/// completion of an effect and carries the generation it was issued under.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Begin (or restart) a session.
    Start,

    /// The user asked to place the order with this email.
    Confirm { email: String },

    /// Menu fetch resolved, successfully or not.
    MenuLoaded {
        generation: Generation,
        items: Vec<MenuItem>,
    },

    /// An utterance finished (or could not be played).
    SpeechFinished {
        generation: Generation,
        utterance: u64,
    },

    /// The capture started and the microphone is live.
    ListeningStarted { generation: Generation },

    /// No recognition capability on this platform.
    CaptureUnavailable { generation: Generation },

    /// The running transcript changed.
    TranscriptUpdated {
        generation: Generation,
        text: String,
    },

    /// The recognizer reported an error code.
    RecognitionFailed {
        generation: Generation,
        code: String,
    },

    /// End of capture.
    CaptureCompleted {
        generation: Generation,
        capture: TranscriptCapture,
    },

    /// A submission attempt resolved.
    SubmissionResolved {
        generation: Generation,
        attempt: u64,
        outcome: Result<OrderResult, GatewayError>,
    },

    /// The safety delay after a submission elapsed.
    SafetyReenable {
        generation: Generation,
        attempt: u64,
    },
}

impl SessionEvent {
    /// Generation this event belongs to; `None` for user actions.
    pub const fn generation(&self) -> Option<Generation> {
        match self {
            Self::Start | Self::Confirm { .. } => None,
            Self::MenuLoaded { generation, .. }
            | Self::SpeechFinished { generation, .. }
            | Self::ListeningStarted { generation }
            | Self::CaptureUnavailable { generation }
            | Self::TranscriptUpdated { generation, .. }
            | Self::RecognitionFailed { generation, .. }
            | Self::CaptureCompleted { generation, .. }
            | Self::SubmissionResolved { generation, .. }
            | Self::SafetyReenable { generation, .. } => Some(*generation),
        }
    }

    /// Short name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Confirm { .. } => "confirm",
            Self::MenuLoaded { .. } => "menu-loaded",
            Self::SpeechFinished { .. } => "speech-finished",
            Self::ListeningStarted { .. } => "listening-started",
            Self::CaptureUnavailable { .. } => "capture-unavailable",
            Self::TranscriptUpdated { .. } => "transcript-updated",
            Self::RecognitionFailed { .. } => "recognition-failed",
            Self::CaptureCompleted { .. } => "capture-completed",
            Self::SubmissionResolved { .. } => "submission-resolved",
            Self::SafetyReenable { .. } => "safety-reenable",
        }
    }
}
