use std::fmt;

use crate::domain::{MenuItem, OrderResult, TranscriptCapture};
use crate::session::SessionState;

/// Session generation token.
///
/// Incremented on every Start. Asynchronous completions carry the
/// generation they were issued under and are discarded when it is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All session-scoped state, owned by [`OrderSession`](crate::session::OrderSession).
///
/// Created once at startup and reset on every Start; nothing here outlives
/// a session except the generation counter.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub(crate) generation: Generation,
    pub(crate) state: SessionState,
    pub(crate) menu: Vec<MenuItem>,
    pub(crate) capture: TranscriptCapture,
    pub(crate) capture_error: Option<String>,
    pub(crate) last_result: Option<OrderResult>,
    pub(crate) confirm_enabled: bool,
    /// Id of the utterance whose completion may drive the flow.
    pub(crate) utterance: u64,
    /// Id of the most recent submission attempt.
    pub(crate) attempt: u64,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every session-scoped field. Idempotent; the generation is kept.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
    }

    pub const fn generation(&self) -> Generation {
        self.generation
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub const fn capture(&self) -> &TranscriptCapture {
        &self.capture
    }

    pub const fn last_result(&self) -> Option<&OrderResult> {
        self.last_result.as_ref()
    }

    pub const fn confirm_enabled(&self) -> bool {
        self.confirm_enabled
    }

    pub(crate) fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }
}
