use std::fmt;

use serde::{Deserialize, Serialize};

/// Current state of the order session. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    /// Nothing started yet.
    #[default]
    Idle,

    /// Fetching the menu.
    Preparing,

    /// Speaking the welcome prompt.
    Prompting,

    /// Capturing the spoken order.
    Listening,

    /// Transcript captured; waiting for the user to confirm.
    AwaitingConfirmation,

    /// Order submission in flight.
    Submitting,

    /// Order saved.
    Completed,

    /// The attempt cannot continue; only Start recovers.
    Failed,
}

impl SessionState {
    /// Whether an asynchronous stage owned by the session is in progress.
    pub const fn is_busy(self) -> bool {
        matches!(
            self,
            Self::Preparing | Self::Prompting | Self::Listening | Self::Submitting
        )
    }

    /// Short label used in logs and status displays.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Preparing => "preparing",
            Self::Prompting => "prompting",
            Self::Listening => "listening",
            Self::AwaitingConfirmation => "awaiting-confirmation",
            Self::Submitting => "submitting",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
