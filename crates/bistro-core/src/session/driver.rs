//! Async driver: executes session effects against the ports.
//!
//! The driver owns the [`OrderSession`] and runs on a single task. Effects
//! that perform I/O are spawned; their completions come back through one
//! internal channel and are applied in arrival order, so session state is
//! never touched concurrently and needs no lock.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::domain::TranscriptCapture;
use crate::ports::{
    CaptureEvent, CaptureStream, CelebrationPort, ListenError, ListeningPort, OrderGatewayPort,
    PresenterPort, SpeechPromptPort,
};
use crate::services::MenuCatalog;
use crate::session::{Effect, Generation, OrderSession, SessionConfig, SessionEvent, SessionState};

/// The collaborators a session drives.
#[derive(Clone)]
pub struct SessionPorts {
    pub menu: MenuCatalog,
    pub gateway: Arc<dyn OrderGatewayPort>,
    pub prompt: Arc<dyn SpeechPromptPort>,
    pub listening: Arc<dyn ListeningPort>,
    pub presenter: Arc<dyn PresenterPort>,
    pub celebration: Arc<dyn CelebrationPort>,
}

enum DriverInput {
    Event(SessionEvent),
    Shutdown,
}

/// Cloneable handle for user actions.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<DriverInput>,
    state: watch::Receiver<SessionState>,
}

impl SessionHandle {
    /// Start (or restart) the session.
    pub fn start(&self) {
        self.send(DriverInput::Event(SessionEvent::Start));
    }

    /// Ask to place the order with `email`.
    pub fn confirm(&self, email: impl Into<String>) {
        self.send(DriverInput::Event(SessionEvent::Confirm {
            email: email.into(),
        }));
    }

    /// Stop the driver loop. Pending completions are dropped.
    pub fn shutdown(&self) {
        self.send(DriverInput::Shutdown);
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    fn send(&self, input: DriverInput) {
        if self.tx.send(input).is_err() {
            tracing::warn!("Session driver is no longer running");
        }
    }
}

/// Runs an [`OrderSession`] against its ports.
pub struct SessionDriver {
    session: OrderSession,
    ports: SessionPorts,
    input_rx: mpsc::UnboundedReceiver<DriverInput>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    state_tx: watch::Sender<SessionState>,
    capture_task: Option<JoinHandle<()>>,
}

impl SessionDriver {
    /// Create a driver and the handle used to control it.
    #[must_use]
    pub fn new(config: SessionConfig, ports: SessionPorts) -> (Self, SessionHandle) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SessionState::Idle);

        let driver = Self {
            session: OrderSession::new(config),
            ports,
            input_rx,
            events_tx,
            events_rx,
            state_tx,
            capture_task: None,
        };
        let handle = SessionHandle {
            tx: input_tx,
            state: state_rx,
        };
        (driver, handle)
    }

    /// The session being driven.
    pub const fn session(&self) -> &OrderSession {
        &self.session
    }

    /// Process inputs and completions until shutdown or until every handle is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                biased;
                input = self.input_rx.recv() => match input {
                    Some(DriverInput::Event(event)) => self.dispatch(event),
                    Some(DriverInput::Shutdown) | None => break,
                },
                Some(event) = self.events_rx.recv() => self.dispatch(event),
            }
        }

        self.ports.listening.cancel();
        if let Some(task) = self.capture_task.take() {
            task.abort();
        }
        tracing::debug!("Session driver stopped");
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let effects = self.session.handle(event);
        self.state_tx.send_replace(self.session.state());
        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::RenderStatus(text) => self.ports.presenter.render_status(&text),
            Effect::RenderTranscript(text) => self.ports.presenter.render_transcript(&text),
            Effect::RenderReceipt(receipt) => self.ports.presenter.render_receipt(&receipt),
            Effect::SetConfirmEnabled(enabled) => self.ports.presenter.set_confirm_enabled(enabled),
            Effect::ClearInputs => self.ports.presenter.clear_inputs(),
            Effect::Celebrate => self.ports.celebration.celebrate(),
            Effect::FetchMenu { generation } => {
                let menu = self.ports.menu.clone();
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let items = menu.load().await;
                    let _ = tx.send(SessionEvent::MenuLoaded { generation, items });
                });
            }
            Effect::Speak {
                generation,
                utterance,
                text,
                delay,
            } => {
                let prompt = Arc::clone(&self.ports.prompt);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    if let Err(e) = prompt.speak(&text).await {
                        tracing::warn!(error = %e, "{}", e.user_message());
                    }
                    let _ = tx.send(SessionEvent::SpeechFinished {
                        generation,
                        utterance,
                    });
                });
            }
            Effect::StartListening { generation } => self.start_listening(generation),
            Effect::CancelListening => {
                self.ports.listening.cancel();
                if let Some(task) = self.capture_task.take() {
                    task.abort();
                }
            }
            Effect::Submit {
                generation,
                attempt,
                request,
            } => {
                let gateway = Arc::clone(&self.ports.gateway);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let outcome = gateway.submit(&request).await;
                    let _ = tx.send(SessionEvent::SubmissionResolved {
                        generation,
                        attempt,
                        outcome,
                    });
                });
            }
            Effect::ScheduleSafetyReenable {
                generation,
                attempt,
                delay,
            } => {
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(SessionEvent::SafetyReenable {
                        generation,
                        attempt,
                    });
                });
            }
        }
    }

    fn start_listening(&mut self, generation: Generation) {
        if let Some(task) = self.capture_task.take() {
            task.abort();
        }

        match self.ports.listening.start() {
            Ok(stream) => {
                let _ = self
                    .events_tx
                    .send(SessionEvent::ListeningStarted { generation });
                self.capture_task = Some(tokio::spawn(forward_capture(
                    stream,
                    generation,
                    self.events_tx.clone(),
                )));
            }
            Err(ListenError::CapabilityUnavailable) => {
                let _ = self
                    .events_tx
                    .send(SessionEvent::CaptureUnavailable { generation });
            }
            Err(ListenError::StartFailed(code)) => {
                // The recognizer exists but would not start: report the code
                // and end the capture empty, like any other recognition error.
                let _ = self
                    .events_tx
                    .send(SessionEvent::ListeningStarted { generation });
                let _ = self
                    .events_tx
                    .send(SessionEvent::RecognitionFailed { generation, code });
                let _ = self.events_tx.send(SessionEvent::CaptureCompleted {
                    generation,
                    capture: TranscriptCapture::finalized(""),
                });
            }
        }
    }
}

/// Translate one capture's events into session events for `generation`.
///
/// If the stream closes without a completion, one is synthesized from the
/// last transcript seen.
async fn forward_capture(
    mut stream: CaptureStream,
    generation: Generation,
    tx: mpsc::UnboundedSender<SessionEvent>,
) {
    let mut last_text = String::new();
    while let Some(event) = stream.recv().await {
        let event = match event {
            CaptureEvent::TranscriptUpdate(text) => {
                last_text.clone_from(&text);
                SessionEvent::TranscriptUpdated { generation, text }
            }
            CaptureEvent::Error(code) => SessionEvent::RecognitionFailed { generation, code },
            CaptureEvent::Complete(capture) => {
                let _ = tx.send(SessionEvent::CaptureCompleted {
                    generation,
                    capture,
                });
                return;
            }
        };
        if tx.send(event).is_err() {
            return;
        }
    }

    tracing::debug!(%generation, "Capture stream closed without completion");
    let _ = tx.send(SessionEvent::CaptureCompleted {
        generation,
        capture: TranscriptCapture::finalized(last_text),
    });
}
