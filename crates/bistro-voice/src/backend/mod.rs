//! Speech engine backend traits.
//!
//! [`SynthesisBackend`] and [`RecognitionBackend`] abstract over the concrete
//! engines so the prompt and listening adapters never touch platform APIs.
//!
//! ## Backend implementations
//!
//! | Module       | Recognition | Synthesis |
//! |--------------|-------------|-----------|
//! | [`console`]  |             |     ✓     |
//! | [`typed`]    |      ✓      |           |

pub mod console;
pub mod typed;

use std::fmt;

use bistro_core::DEFAULT_LOCALE;
use tokio::sync::mpsc;

use crate::error::VoiceError;

// ── Shared types ───────────────────────────────────────────────────

/// A voice offered by a synthesis engine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceDescriptor {
    /// Engine-specific display name, e.g. `Google UK English Female`.
    pub name: String,

    /// BCP-47 language tag, e.g. `en-IN`.
    pub lang: String,

    /// Gender, when the engine reports one.
    pub gender: Option<VoiceGender>,
}

impl VoiceDescriptor {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            gender: None,
        }
    }

    #[must_use]
    pub const fn with_gender(mut self, gender: VoiceGender) -> Self {
        self.gender = Some(gender);
        self
    }
}

/// Voice gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoiceGender {
    Female,
    Male,
}

impl fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => f.write_str("female"),
            Self::Male => f.write_str("male"),
        }
    }
}

/// One synthesis request.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Voice name; `None` leaves the choice to the engine.
    pub voice: Option<String>,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
}

/// One recognition result slot.
///
/// Engines revise a slot in place while it is interim; `index` identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    pub index: usize,
    /// Candidate transcripts, best first.
    pub alternatives: Vec<String>,
    pub is_final: bool,
}

impl RecognitionResult {
    /// A single-alternative result.
    pub fn new(index: usize, text: impl Into<String>, is_final: bool) -> Self {
        Self {
            index,
            alternatives: vec![text.into()],
            is_final,
        }
    }

    /// The best alternative, if any.
    pub fn best(&self) -> Option<&str> {
        self.alternatives.first().map(String::as_str)
    }
}

/// Raw events emitted by a recognition engine during one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerEvent {
    /// Current results, possibly revising earlier slots.
    Results(Vec<RecognitionResult>),
    /// Engine error code, e.g. `no-speech` or `not-allowed`.
    Error(String),
    /// End of capture.
    End,
}

/// Recognizer settings for one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub locale: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            continuous: false,
            interim_results: true,
        }
    }
}

impl RecognitionConfig {
    /// Default settings for `locale`.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }
}

// ── Synthesis Backend Trait ────────────────────────────────────────

/// Backend-agnostic text-to-speech engine.
#[async_trait::async_trait]
pub trait SynthesisBackend: Send + Sync {
    /// Voices currently offered. May be empty until the engine warms up.
    fn voices(&self) -> Vec<VoiceDescriptor>;

    /// Speak one utterance, resolving when playback ends.
    async fn speak(&self, utterance: &Utterance) -> Result<(), VoiceError>;

    /// Stop whatever is currently being spoken.
    fn cancel(&self) {}
}

// ── Recognition Backend Trait ──────────────────────────────────────

/// Backend-agnostic speech recognition engine.
pub trait RecognitionBackend: Send + Sync {
    /// Whether recognition is available at all.
    fn is_supported(&self) -> bool;

    /// Begin one capture. The stream ends after [`RecognizerEvent::End`].
    fn start(
        &self,
        config: &RecognitionConfig,
    ) -> Result<mpsc::UnboundedReceiver<RecognizerEvent>, VoiceError>;

    /// Abandon the current capture, if any.
    fn abort(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognition_defaults_are_single_shot_with_interim_results() {
        let config = RecognitionConfig::default();
        assert_eq!(config.locale, "en-IN");
        assert!(!config.continuous);
        assert!(config.interim_results);
    }

    #[test]
    fn best_alternative_is_first() {
        let result = RecognitionResult {
            index: 0,
            alternatives: vec!["two tea".to_string(), "to tea".to_string()],
            is_final: false,
        };
        assert_eq!(result.best(), Some("two tea"));
    }

    #[test]
    fn gender_renders_lowercase() {
        assert_eq!(VoiceGender::Female.to_string(), "female");
    }
}
