//! Terminal recognition backend: a typed line stands in for a spoken order.
//!
//! [`TypedRecognizer`] is the engine side; [`TypedFeed`] is the keyboard
//! side. A fed line is replayed as word-by-word interim results, then a
//! final result and end of capture, mimicking a streaming recognizer.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc;

use super::{RecognitionBackend, RecognitionConfig, RecognitionResult, RecognizerEvent};
use crate::error::VoiceError;

/// Prefix of a fed line that simulates a recognizer error.
pub const ERROR_PREFIX: &str = "!error";

type Slot = Arc<Mutex<Option<mpsc::UnboundedSender<RecognizerEvent>>>>;

/// Recognition engine driven by typed lines.
pub struct TypedRecognizer {
    supported: bool,
    active: Slot,
}

impl TypedRecognizer {
    /// A recognizer and the feed that supplies its lines.
    pub fn new() -> (Self, TypedFeed) {
        let active: Slot = Arc::default();
        let feed = TypedFeed {
            active: Arc::clone(&active),
        };
        (
            Self {
                supported: true,
                active,
            },
            feed,
        )
    }

    /// A recognizer reporting no capability, for environments without input.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            active: Arc::default(),
        }
    }
}

impl RecognitionBackend for TypedRecognizer {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start(
        &self,
        config: &RecognitionConfig,
    ) -> Result<mpsc::UnboundedReceiver<RecognizerEvent>, VoiceError> {
        if !self.supported {
            return Err(VoiceError::RecognitionUnavailable);
        }
        let (tx, rx) = mpsc::unbounded_channel();
        // Replacing the sender closes any prior capture's stream.
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = Some(tx);
        tracing::debug!(locale = %config.locale, "Typed recognizer listening");
        Ok(rx)
    }

    fn abort(&self) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

/// Keyboard side of a [`TypedRecognizer`].
#[derive(Clone)]
pub struct TypedFeed {
    active: Slot,
}

impl TypedFeed {
    /// Whether a capture is waiting for a line.
    pub fn is_listening(&self) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Feed one line into the active capture and end it.
    ///
    /// Returns `false` when no capture is active. An empty line ends the
    /// capture with nothing recognized; `!error <code>` reports `code`.
    pub fn submit_line(&self, line: &str) -> bool {
        let Some(tx) = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        else {
            return false;
        };

        for event in line_events(line) {
            if tx.send(event).is_err() {
                break;
            }
        }
        true
    }
}

/// The recognizer events a typed line plays back as.
fn line_events(line: &str) -> Vec<RecognizerEvent> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix(ERROR_PREFIX) {
        let code = rest.trim();
        let code = if code.is_empty() { "unknown" } else { code };
        return vec![
            RecognizerEvent::Error(code.to_string()),
            RecognizerEvent::End,
        ];
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let mut events: Vec<RecognizerEvent> = (1..=words.len())
        .map(|n| {
            RecognizerEvent::Results(vec![RecognitionResult::new(
                0,
                words[..n].join(" "),
                n == words.len(),
            )])
        })
        .collect();
    events.push(RecognizerEvent::End);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<RecognizerEvent>) -> Vec<RecognizerEvent> {
        let mut events = Vec::new();
        while let Ok(e) = rx.try_recv() {
            events.push(e);
        }
        events
    }

    #[test]
    fn line_is_replayed_word_by_word() {
        let (recognizer, feed) = TypedRecognizer::new();
        let mut rx = recognizer.start(&RecognitionConfig::default()).unwrap();
        assert!(feed.is_listening());

        assert!(feed.submit_line("two chicken biryani"));
        assert_eq!(
            drain(&mut rx),
            vec![
                RecognizerEvent::Results(vec![RecognitionResult::new(0, "two", false)]),
                RecognizerEvent::Results(vec![RecognitionResult::new(0, "two chicken", false)]),
                RecognizerEvent::Results(vec![RecognitionResult::new(
                    0,
                    "two chicken biryani",
                    true
                )]),
                RecognizerEvent::End,
            ]
        );
        assert!(!feed.is_listening());
    }

    #[test]
    fn empty_line_only_ends_capture() {
        assert_eq!(line_events("   "), vec![RecognizerEvent::End]);
    }

    #[test]
    fn error_directive_reports_code() {
        assert_eq!(
            line_events("!error no-speech"),
            vec![
                RecognizerEvent::Error("no-speech".to_string()),
                RecognizerEvent::End
            ]
        );
        assert_eq!(
            line_events("!error"),
            vec![
                RecognizerEvent::Error("unknown".to_string()),
                RecognizerEvent::End
            ]
        );
    }

    #[test]
    fn feed_without_capture_is_rejected() {
        let (_recognizer, feed) = TypedRecognizer::new();
        assert!(!feed.submit_line("one coke"));
    }

    #[test]
    fn restart_closes_previous_stream() {
        let (recognizer, feed) = TypedRecognizer::new();
        let mut first = recognizer.start(&RecognitionConfig::default()).unwrap();
        let mut second = recognizer.start(&RecognitionConfig::default()).unwrap();

        feed.submit_line("one coke");
        assert!(drain(&mut first).is_empty());
        assert!(matches!(
            first.try_recv(),
            Err(mpsc::error::TryRecvError::Disconnected)
        ));
        assert_eq!(drain(&mut second).len(), 3);
    }

    #[test]
    fn unsupported_recognizer_refuses_to_start() {
        let recognizer = TypedRecognizer::unsupported();
        assert!(!recognizer.is_supported());
        assert!(matches!(
            recognizer.start(&RecognitionConfig::default()),
            Err(VoiceError::RecognitionUnavailable)
        ));
    }
}
