//! Integration tests for `SessionDriver` with in-memory fake ports.
//!
//! Time is paused, so prompt delays, gateway latency and the safety timer
//! advance instantly whenever the runtime is idle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use bistro_core::{
    CaptureEvent, CaptureStream, CelebrationPort, GatewayError, ListenError, ListeningPort,
    MenuCatalog, MenuItem, MenuSourcePort, OrderGatewayPort, OrderLine, OrderRequest, OrderResult,
    PresenterPort, Receipt, SessionConfig, SessionDriver, SessionError, SessionHandle,
    SessionPorts, SessionState, SpeechPromptPort, TranscriptCapture,
};

// ── Fakes ──────────────────────────────────────────────────────────

struct FixedMenu(Vec<MenuItem>);

#[async_trait]
impl MenuSourcePort for FixedMenu {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, GatewayError> {
        Ok(self.0.clone())
    }
}

struct FakeGateway {
    latency: Duration,
    requests: Mutex<Vec<OrderRequest>>,
}

impl FakeGateway {
    fn new(latency: Duration) -> Self {
        Self {
            latency,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderGatewayPort for FakeGateway {
    async fn submit(&self, request: &OrderRequest) -> Result<OrderResult, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        tokio::time::sleep(self.latency).await;
        Ok(OrderResult {
            saved: true,
            items: vec![OrderLine {
                name: "Tea".to_string(),
                qty: 2,
                price: 20.0,
            }],
            total: 40.0,
            email_sent: true,
            error: None,
        })
    }
}

#[derive(Default)]
struct FakePrompt {
    spoken: Mutex<Vec<String>>,
}

#[async_trait]
impl SpeechPromptPort for FakePrompt {
    async fn speak(&self, text: &str) -> Result<(), SessionError> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct FakeListening {
    available: bool,
    senders: Mutex<Vec<mpsc::UnboundedSender<CaptureEvent>>>,
}

impl FakeListening {
    fn new(available: bool) -> Self {
        Self {
            available,
            senders: Mutex::new(Vec::new()),
        }
    }

    fn starts(&self) -> usize {
        self.senders.lock().unwrap().len()
    }

    /// Send on the newest capture.
    fn emit(&self, event: CaptureEvent) {
        let senders = self.senders.lock().unwrap();
        let tx = senders.last().expect("listening was never started");
        let _ = tx.send(event);
    }

    /// Send on the `index`-th capture started, whether or not it is current.
    fn emit_on(&self, index: usize, event: CaptureEvent) {
        let senders = self.senders.lock().unwrap();
        let _ = senders[index].send(event);
    }
}

impl ListeningPort for FakeListening {
    fn start(&self) -> Result<CaptureStream, ListenError> {
        if !self.available {
            return Err(ListenError::CapabilityUnavailable);
        }
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().unwrap().push(tx);
        Ok(rx)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Transcript(String),
    Status(String),
    Receipt(Receipt),
    Confirm(bool),
    Clear,
}

#[derive(Default)]
struct RecordingPresenter {
    calls: Mutex<Vec<Call>>,
}

impl RecordingPresenter {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn last_confirm(&self) -> Option<bool> {
        self.calls().iter().rev().find_map(|c| match c {
            Call::Confirm(enabled) => Some(*enabled),
            _ => None,
        })
    }

    fn last_status(&self) -> Option<String> {
        self.calls().iter().rev().find_map(|c| match c {
            Call::Status(text) => Some(text.clone()),
            _ => None,
        })
    }

    fn receipts(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Receipt(_)))
            .count()
    }
}

impl PresenterPort for RecordingPresenter {
    fn render_transcript(&self, text: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Transcript(text.to_string()));
    }

    fn render_status(&self, text: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Status(text.to_string()));
    }

    fn render_receipt(&self, receipt: &Receipt) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Receipt(receipt.clone()));
    }

    fn set_confirm_enabled(&self, enabled: bool) {
        self.calls.lock().unwrap().push(Call::Confirm(enabled));
    }

    fn clear_inputs(&self) {
        self.calls.lock().unwrap().push(Call::Clear);
    }
}

#[derive(Default)]
struct CountingCelebration(AtomicUsize);

impl CelebrationPort for CountingCelebration {
    fn celebrate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

// ── Harness ────────────────────────────────────────────────────────

struct Harness {
    handle: SessionHandle,
    gateway: Arc<FakeGateway>,
    prompt: Arc<FakePrompt>,
    listening: Arc<FakeListening>,
    presenter: Arc<RecordingPresenter>,
    celebration: Arc<CountingCelebration>,
    task: tokio::task::JoinHandle<()>,
}

impl Harness {
    fn spawn(listening_available: bool, gateway_latency: Duration) -> Self {
        let gateway = Arc::new(FakeGateway::new(gateway_latency));
        let prompt = Arc::new(FakePrompt::default());
        let listening = Arc::new(FakeListening::new(listening_available));
        let presenter = Arc::new(RecordingPresenter::default());
        let celebration = Arc::new(CountingCelebration::default());

        let ports = SessionPorts {
            menu: MenuCatalog::new(Arc::new(FixedMenu(vec![MenuItem::new("Tea", 20.0)]))),
            gateway: gateway.clone(),
            prompt: prompt.clone(),
            listening: listening.clone(),
            presenter: presenter.clone(),
            celebration: celebration.clone(),
        };
        let (driver, handle) = SessionDriver::new(SessionConfig::default(), ports);
        let task = tokio::spawn(driver.run());

        Self {
            handle,
            gateway,
            prompt,
            listening,
            presenter,
            celebration,
            task,
        }
    }

    async fn shutdown(self) {
        self.handle.shutdown();
        self.task.await.unwrap();
    }
}

/// Poll `condition` with short sleeps so paused time can auto-advance.
async fn eventually(mut condition: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached");
}

async fn speak_order(h: &Harness, text: &str) {
    eventually(|| h.handle.state() == SessionState::Listening).await;
    h.listening
        .emit(CaptureEvent::TranscriptUpdate(text.to_string()));
    h.listening
        .emit(CaptureEvent::Complete(TranscriptCapture::finalized(text)));
    eventually(|| h.handle.state() == SessionState::AwaitingConfirmation).await;
}

// ── Tests ──────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn full_order_flow_renders_receipt_and_celebrates() {
    let h = Harness::spawn(true, Duration::from_millis(50));
    h.handle.start();

    speak_order(&h, "two tea").await;
    assert_eq!(h.presenter.last_confirm(), Some(true));

    h.handle.confirm("guest@example.com");
    eventually(|| h.handle.state() == SessionState::Completed).await;

    let requests = h.gateway.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].transcript, "two tea");

    assert_eq!(h.presenter.receipts(), 1);
    assert_eq!(h.celebration.0.load(Ordering::SeqCst), 1);
    assert_eq!(
        h.presenter.last_status().as_deref(),
        Some("Order saved. Email sent.")
    );
    assert!(h.presenter.calls().contains(&Call::Clear));
    assert!(
        h.presenter
            .calls()
            .contains(&Call::Transcript("two tea".to_string()))
    );

    let spoken = h.prompt.spoken.lock().unwrap().clone();
    assert_eq!(spoken.len(), 2);
    assert!(spoken[0].starts_with("Welcome to Sunrise Bistro."));
    assert!(spoken[1].contains("rupees 40"));

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn confirm_is_reenabled_after_safety_delay() {
    let h = Harness::spawn(true, Duration::ZERO);
    h.handle.start();
    speak_order(&h, "two tea").await;

    h.handle.confirm("guest@example.com");
    eventually(|| h.handle.state() == SessionState::Completed).await;
    assert_eq!(h.presenter.last_confirm(), Some(false));

    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert_eq!(h.presenter.last_confirm(), Some(true));
    assert_eq!(h.handle.state(), SessionState::Completed);

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn empty_email_never_reaches_gateway() {
    let h = Harness::spawn(true, Duration::ZERO);
    h.handle.start();
    speak_order(&h, "two tea").await;

    h.handle.confirm("  ");
    eventually(|| h.presenter.last_status().as_deref() == Some("Please enter your email.")).await;

    assert!(h.gateway.requests().is_empty());
    assert_eq!(h.handle.state(), SessionState::AwaitingConfirmation);

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn restart_during_submission_drops_the_late_result() {
    let h = Harness::spawn(true, Duration::from_secs(5));
    h.handle.start();
    speak_order(&h, "two tea").await;

    h.handle.confirm("guest@example.com");
    eventually(|| h.handle.state() == SessionState::Submitting).await;

    h.handle.start();
    eventually(|| h.listening.starts() == 2 && h.handle.state() == SessionState::Listening).await;

    // Let the first submission resolve well after the restart.
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(h.handle.state(), SessionState::Listening);
    assert_eq!(h.presenter.receipts(), 0);
    assert_eq!(h.celebration.0.load(Ordering::SeqCst), 0);

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn restart_while_listening_starts_a_fresh_capture() {
    let h = Harness::spawn(true, Duration::ZERO);
    h.handle.start();
    eventually(|| h.handle.state() == SessionState::Listening).await;
    h.listening
        .emit(CaptureEvent::TranscriptUpdate("old order".to_string()));

    h.handle.start();
    eventually(|| h.listening.starts() == 2 && h.handle.state() == SessionState::Listening).await;

    // The first capture keeps talking after the restart.
    h.listening
        .emit_on(0, CaptureEvent::TranscriptUpdate("stale words".to_string()));
    h.listening.emit_on(
        0,
        CaptureEvent::Complete(TranscriptCapture::finalized("stale words")),
    );
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(h.handle.state(), SessionState::Listening);
    assert!(
        !h.presenter
            .calls()
            .contains(&Call::Transcript("stale words".to_string()))
    );

    h.listening
        .emit(CaptureEvent::Complete(TranscriptCapture::finalized("one tea")));
    eventually(|| h.handle.state() == SessionState::AwaitingConfirmation).await;

    h.handle.confirm("guest@example.com");
    eventually(|| h.handle.state() == SessionState::Completed).await;
    assert_eq!(h.gateway.requests()[0].transcript, "one tea");

    h.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn missing_recognizer_fails_and_start_retries() {
    let h = Harness::spawn(false, Duration::ZERO);
    h.handle.start();
    eventually(|| h.handle.state() == SessionState::Failed).await;

    let status = h.presenter.last_status().unwrap_or_default();
    assert!(status.contains("not supported"), "got {status:?}");

    h.handle.start();
    eventually(|| {
        h.prompt.spoken.lock().unwrap().len() == 2 && h.handle.state() == SessionState::Failed
    })
    .await;

    h.shutdown().await;
}
