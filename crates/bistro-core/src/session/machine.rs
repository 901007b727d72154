//! The order session transition function.

use std::time::Duration;

use crate::domain::{OrderRequest, OrderResult, TranscriptCapture};
use crate::error::{SessionError, ValidationError};
use crate::ports::GatewayError;
use crate::session::messages;
use crate::session::{Effect, Generation, SessionContext, SessionEvent, SessionState};
use crate::settings::{
    DEFAULT_PROMPT_DELAY_MS, DEFAULT_RESTAURANT_NAME, DEFAULT_SAFETY_REENABLE_MS,
};

/// Static configuration of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name used in the welcome prompt.
    pub restaurant_name: String,
    /// Pause before the welcome prompt is spoken.
    pub prompt_delay: Duration,
    /// Delay after a submission resolves before confirm is forced back on.
    pub safety_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            restaurant_name: DEFAULT_RESTAURANT_NAME.to_string(),
            prompt_delay: Duration::from_millis(DEFAULT_PROMPT_DELAY_MS),
            safety_delay: Duration::from_millis(DEFAULT_SAFETY_REENABLE_MS),
        }
    }
}

/// The ordering flow as an explicit `(context, event) → effects` function.
///
/// `OrderSession` performs no I/O. Completions from a superseded generation
/// are dropped before anything else is looked at.
#[derive(Debug, Clone)]
pub struct OrderSession {
    config: SessionConfig,
    ctx: SessionContext,
}

impl OrderSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ctx: SessionContext::new(),
        }
    }

    pub const fn state(&self) -> SessionState {
        self.ctx.state
    }

    pub const fn generation(&self) -> Generation {
        self.ctx.generation
    }

    pub const fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Begin a fresh session: bump the generation and reset all
    /// session-scoped state. Safe to call in any state, any number of times.
    pub fn reset(&mut self) -> Vec<Effect> {
        let previous = self.ctx.state;
        self.ctx.generation = self.ctx.generation.next();
        self.ctx.reset();

        tracing::info!(
            generation = %self.ctx.generation,
            previous = %previous,
            "Session started"
        );

        let mut effects = vec![Effect::CancelListening];
        self.transition(SessionState::Preparing);
        effects.push(Effect::RenderStatus(messages::PREPARING.to_string()));
        effects.push(Effect::RenderTranscript(String::new()));
        self.set_confirm(false, &mut effects, true);
        effects.push(Effect::FetchMenu {
            generation: self.ctx.generation,
        });
        effects
    }

    /// Apply one event and return the effects to perform, in order.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<Effect> {
        if let Some(generation) = event.generation() {
            if !self.ctx.is_current(generation) {
                tracing::trace!(
                    event = event.name(),
                    stale = %generation,
                    current = %self.ctx.generation,
                    "Discarding event from superseded session"
                );
                return Vec::new();
            }
        }

        match event {
            SessionEvent::Start => self.reset(),
            SessionEvent::Confirm { email } => self.on_confirm(&email),
            SessionEvent::MenuLoaded { items, .. } => {
                if self.ctx.state != SessionState::Preparing {
                    return self.ignore("menu-loaded");
                }
                self.ctx.menu = items;
                self.transition(SessionState::Prompting);
                let text = messages::welcome_prompt(&self.config.restaurant_name, &self.ctx.menu);
                vec![self.speak(text, self.config.prompt_delay)]
            }
            SessionEvent::SpeechFinished { utterance, .. } => {
                if utterance != self.ctx.utterance {
                    return self.ignore("speech-finished");
                }
                if self.ctx.state == SessionState::Prompting {
                    vec![Effect::StartListening {
                        generation: self.ctx.generation,
                    }]
                } else {
                    Vec::new()
                }
            }
            SessionEvent::ListeningStarted { .. } => {
                if self.ctx.state != SessionState::Prompting {
                    return self.ignore("listening-started");
                }
                self.ctx.capture = TranscriptCapture::default();
                self.transition(SessionState::Listening);
                vec![Effect::RenderStatus(messages::LISTENING.to_string())]
            }
            SessionEvent::CaptureUnavailable { .. } => {
                if self.ctx.state != SessionState::Prompting {
                    return self.ignore("capture-unavailable");
                }
                let err = SessionError::CapabilityUnavailable;
                tracing::warn!(error = %err, "Cannot listen for the order");
                self.transition(SessionState::Failed);
                vec![Effect::RenderStatus(err.user_message())]
            }
            SessionEvent::TranscriptUpdated { text, .. } => {
                if self.ctx.state != SessionState::Listening {
                    return self.ignore("transcript-updated");
                }
                self.ctx.capture = TranscriptCapture::live(text.clone());
                vec![Effect::RenderTranscript(text)]
            }
            SessionEvent::RecognitionFailed { code, .. } => {
                if self.ctx.state != SessionState::Listening {
                    return self.ignore("recognition-failed");
                }
                let err = SessionError::RecognitionError(code.clone());
                tracing::warn!(code = %code, "Recognition error");
                self.ctx.capture_error = Some(code);
                vec![Effect::RenderStatus(err.user_message())]
            }
            SessionEvent::CaptureCompleted { capture, .. } => {
                if self.ctx.state != SessionState::Listening {
                    return self.ignore("capture-completed");
                }
                self.on_capture_completed(capture)
            }
            SessionEvent::SubmissionResolved {
                attempt, outcome, ..
            } => {
                if self.ctx.state != SessionState::Submitting || attempt != self.ctx.attempt {
                    return self.ignore("submission-resolved");
                }
                self.on_submission_resolved(outcome)
            }
            SessionEvent::SafetyReenable { attempt, .. } => self.on_safety_reenable(attempt),
        }
    }

    fn on_confirm(&mut self, email: &str) -> Vec<Effect> {
        match self.ctx.state {
            SessionState::AwaitingConfirmation => {}
            state if state.is_busy() => {
                return vec![Effect::RenderStatus(messages::PLEASE_WAIT.to_string())];
            }
            _ => {
                let err = SessionError::from(ValidationError::EmptyTranscript);
                return vec![Effect::RenderStatus(err.user_message())];
            }
        }

        if let Err(err) = validate(&self.ctx.capture, email) {
            tracing::debug!(reason = %err, "Confirm blocked");
            return vec![Effect::RenderStatus(SessionError::from(err).user_message())];
        }

        self.ctx.attempt += 1;
        let request = OrderRequest::new(&self.ctx.capture.text, email);
        self.transition(SessionState::Submitting);

        let mut effects = vec![Effect::RenderStatus(messages::PLACING_ORDER.to_string())];
        self.set_confirm(false, &mut effects, false);
        effects.push(Effect::Submit {
            generation: self.ctx.generation,
            attempt: self.ctx.attempt,
            request,
        });
        effects
    }

    fn on_capture_completed(&mut self, capture: TranscriptCapture) -> Vec<Effect> {
        let capture = capture.finalize();
        tracing::debug!(chars = capture.text.len(), "Capture finalized");

        let mut effects = vec![Effect::RenderTranscript(capture.text.clone())];
        self.ctx.capture = capture;
        self.transition(SessionState::AwaitingConfirmation);

        // A recognition error keeps its status so the user sees why capture ended.
        if self.ctx.capture_error.is_none() {
            effects.push(Effect::RenderStatus(messages::RECOGNIZED.to_string()));
        }
        self.set_confirm(true, &mut effects, false);
        effects
    }

    fn on_submission_resolved(&mut self, outcome: Result<OrderResult, GatewayError>) -> Vec<Effect> {
        let mut effects = Vec::new();

        match outcome {
            Ok(result) if result.saved => {
                tracing::info!(
                    total = result.total,
                    items = result.items.len(),
                    email_sent = result.email_sent,
                    "Order saved"
                );
                self.transition(SessionState::Completed);
                effects.push(Effect::RenderReceipt(result.receipt()));
                effects.push(self.speak(
                    messages::farewell(result.total, result.email_sent),
                    Duration::ZERO,
                ));
                effects.push(Effect::Celebrate);
                effects.push(Effect::RenderStatus(
                    messages::saved_status(result.email_sent).to_string(),
                ));
                effects.push(Effect::ClearInputs);
                self.set_confirm(false, &mut effects, true);
                self.ctx.capture = TranscriptCapture::default();
                self.ctx.last_result = Some(result);
            }
            Ok(result) => {
                let err = SessionError::ServerRejection(result.error.clone());
                tracing::info!(error = %err, "Order not saved");
                self.transition(SessionState::AwaitingConfirmation);
                effects.push(Effect::RenderStatus(err.user_message()));
                self.set_confirm(true, &mut effects, false);
                self.ctx.last_result = Some(result);
            }
            Err(e) => {
                let err = SessionError::from(e);
                tracing::warn!(error = %err, "Order submission failed");
                self.transition(SessionState::AwaitingConfirmation);
                effects.push(Effect::RenderStatus(err.user_message()));
                self.set_confirm(true, &mut effects, false);
                self.ctx.last_result = None;
            }
        }

        effects.push(Effect::ScheduleSafetyReenable {
            generation: self.ctx.generation,
            attempt: self.ctx.attempt,
            delay: self.config.safety_delay,
        });
        effects
    }

    /// The safety net only ever enables, and yields to state-driven logic:
    /// it is dropped when a newer attempt exists or one is in flight.
    fn on_safety_reenable(&mut self, attempt: u64) -> Vec<Effect> {
        if attempt != self.ctx.attempt || self.ctx.state == SessionState::Submitting {
            return self.ignore("safety-reenable");
        }
        let mut effects = Vec::new();
        self.set_confirm(true, &mut effects, false);
        effects
    }

    fn speak(&mut self, text: String, delay: Duration) -> Effect {
        self.ctx.utterance += 1;
        Effect::Speak {
            generation: self.ctx.generation,
            utterance: self.ctx.utterance,
            text,
            delay,
        }
    }

    /// Emit a confirm-control change when it differs from the current value
    /// (or unconditionally when `force` is set).
    fn set_confirm(&mut self, enabled: bool, effects: &mut Vec<Effect>, force: bool) {
        if force || self.ctx.confirm_enabled != enabled {
            self.ctx.confirm_enabled = enabled;
            effects.push(Effect::SetConfirmEnabled(enabled));
        }
    }

    fn transition(&mut self, next: SessionState) {
        if self.ctx.state != next {
            tracing::debug!(
                generation = %self.ctx.generation,
                old = %self.ctx.state,
                new = %next,
                "Session state transition"
            );
            self.ctx.state = next;
        }
    }

    fn ignore(&self, event: &'static str) -> Vec<Effect> {
        tracing::trace!(event, state = %self.ctx.state, "Event not applicable in current state");
        Vec::new()
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// The submission gate: a finalized, non-blank transcript and a non-blank email.
fn validate(capture: &TranscriptCapture, email: &str) -> Result<(), ValidationError> {
    if !capture.is_submittable() {
        return Err(ValidationError::EmptyTranscript);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_creates_in_idle_state() {
        let session = OrderSession::default();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.generation(), Generation::default());
    }

    #[test]
    fn start_enters_preparing_and_fetches_menu() {
        let mut session = OrderSession::default();
        let effects = session.handle(SessionEvent::Start);

        assert_eq!(session.state(), SessionState::Preparing);
        assert!(effects.contains(&Effect::SetConfirmEnabled(false)));
        assert!(effects.contains(&Effect::FetchMenu {
            generation: Generation::new(1)
        }));
    }

    #[test]
    fn validation_rejects_unfinalized_capture() {
        let capture = TranscriptCapture::live("two coke");
        assert_eq!(
            validate(&capture, "a@b.c"),
            Err(ValidationError::EmptyTranscript)
        );
    }

    #[test]
    fn validation_rejects_blank_email() {
        let capture = TranscriptCapture::finalized("two coke");
        assert_eq!(validate(&capture, "  "), Err(ValidationError::EmptyEmail));
        assert_eq!(validate(&capture, "a@b.c"), Ok(()));
    }

    #[test]
    fn confirm_while_busy_asks_to_wait() {
        let mut session = OrderSession::default();
        session.handle(SessionEvent::Start);
        let effects = session.handle(SessionEvent::Confirm {
            email: "a@b.c".to_string(),
        });
        assert_eq!(
            effects,
            vec![Effect::RenderStatus(messages::PLEASE_WAIT.to_string())]
        );
        assert_eq!(session.state(), SessionState::Preparing);
    }
}
