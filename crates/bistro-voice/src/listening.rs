//! Listening adapter: turns raw recognizer events into order captures.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bistro_core::{CaptureEvent, CaptureStream, ListenError, ListeningPort, TranscriptCapture};
use tokio::sync::mpsc;

use crate::backend::{RecognitionBackend, RecognitionConfig, RecognitionResult, RecognizerEvent};
use crate::error::VoiceError;

/// Builds the running transcript from recognition results.
///
/// Each result slot keeps its latest best alternative; the transcript is the
/// slots in index order, each followed by a space, trimmed.
#[derive(Debug, Clone, Default)]
pub struct TranscriptAccumulator {
    slots: BTreeMap<usize, String>,
}

impl TranscriptAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one batch of results and return the updated transcript.
    pub fn apply(&mut self, results: &[RecognitionResult]) -> String {
        for result in results {
            if let Some(best) = result.best() {
                self.slots.insert(result.index, best.to_string());
            }
        }
        self.transcript()
    }

    pub fn transcript(&self) -> String {
        let mut text = String::new();
        for part in self.slots.values() {
            text.push_str(part);
            text.push(' ');
        }
        text.trim().to_string()
    }
}

/// Implements `ListeningPort` over a [`RecognitionBackend`].
///
/// At most one capture is live. Starting or cancelling bumps an epoch; a
/// capture whose epoch is no longer current stops forwarding events.
pub struct ListeningSession {
    backend: Arc<dyn RecognitionBackend>,
    config: RecognitionConfig,
    epoch: Arc<AtomicU64>,
}

impl ListeningSession {
    pub fn new(backend: Arc<dyn RecognitionBackend>, config: RecognitionConfig) -> Self {
        Self {
            backend,
            config,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub const fn config(&self) -> &RecognitionConfig {
        &self.config
    }
}

impl ListeningPort for ListeningSession {
    fn start(&self) -> Result<CaptureStream, ListenError> {
        if !self.backend.is_supported() {
            return Err(ListenError::CapabilityUnavailable);
        }

        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.backend.abort();

        let events = self.backend.start(&self.config).map_err(|e| match e {
            VoiceError::RecognitionUnavailable => ListenError::CapabilityUnavailable,
            other => ListenError::StartFailed(other.code()),
        })?;
        tracing::debug!(epoch, locale = %self.config.locale, "Capture started");

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(pump(events, tx, epoch, Arc::clone(&self.epoch)));
        Ok(rx)
    }

    fn cancel(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.backend.abort();
    }
}

/// Forward one capture's recognizer events until it ends or is superseded.
async fn pump(
    mut events: mpsc::UnboundedReceiver<RecognizerEvent>,
    tx: mpsc::UnboundedSender<CaptureEvent>,
    epoch: u64,
    current: Arc<AtomicU64>,
) {
    let mut transcript = TranscriptAccumulator::new();

    while let Some(event) = events.recv().await {
        if current.load(Ordering::SeqCst) != epoch {
            tracing::trace!(epoch, "Dropping events of superseded capture");
            return;
        }

        let out = match event {
            RecognizerEvent::Results(results) => {
                CaptureEvent::TranscriptUpdate(transcript.apply(&results))
            }
            RecognizerEvent::Error(code) => CaptureEvent::Error(code),
            RecognizerEvent::End => break,
        };
        if tx.send(out).is_err() {
            return;
        }
    }

    if current.load(Ordering::SeqCst) == epoch {
        let _ = tx.send(CaptureEvent::Complete(TranscriptCapture::finalized(
            transcript.transcript(),
        )));
    }
}
