use std::time::Duration;

use crate::domain::{OrderRequest, Receipt};
use crate::session::Generation;

/// Work requested by the state machine, performed by the driver.
///
/// Render effects map one-to-one onto [`PresenterPort`](crate::ports::PresenterPort)
/// calls. I/O effects complete by feeding a [`SessionEvent`](crate::session::SessionEvent)
/// tagged with the same generation back into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RenderStatus(String),
    RenderTranscript(String),
    RenderReceipt(Receipt),
    SetConfirmEnabled(bool),
    ClearInputs,

    /// Load the menu; completes with `MenuLoaded`.
    FetchMenu { generation: Generation },

    /// Speak after `delay`; completes with `SpeechFinished`.
    Speak {
        generation: Generation,
        utterance: u64,
        text: String,
        delay: Duration,
    },

    /// Start a capture; completes with `ListeningStarted` or
    /// `CaptureUnavailable`, then capture events.
    StartListening { generation: Generation },

    /// Drop the active capture's further events.
    CancelListening,

    /// Submit the order; completes with `SubmissionResolved`.
    Submit {
        generation: Generation,
        attempt: u64,
        request: OrderRequest,
    },

    /// Fire-and-forget celebration.
    Celebrate,

    /// Arm the safety timer; completes with `SafetyReenable`.
    ScheduleSafetyReenable {
        generation: Generation,
        attempt: u64,
        delay: Duration,
    },
}
