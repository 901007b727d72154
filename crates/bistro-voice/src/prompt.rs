//! Speech prompt adapter: speaks session prompts through a synthesis backend.

use std::sync::Arc;

use async_trait::async_trait;
use bistro_core::{SessionError, Settings, SpeechPromptPort};

use crate::backend::{SynthesisBackend, Utterance};
use crate::select::select_voice;

/// Parameters applied to every utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechParams {
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl SpeechParams {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            lang: settings.effective_locale().to_string(),
            rate: settings.effective_speech_rate(),
            pitch: settings.effective_speech_pitch(),
        }
    }
}

/// Implements `SpeechPromptPort` over a [`SynthesisBackend`].
///
/// The voice list is read from the backend on every prompt, since engines
/// populate voices lazily. A missing voice or a failing engine never holds
/// up the caller.
pub struct VoicePrompt {
    backend: Arc<dyn SynthesisBackend>,
    params: SpeechParams,
}

impl VoicePrompt {
    pub fn new(backend: Arc<dyn SynthesisBackend>, params: SpeechParams) -> Self {
        Self { backend, params }
    }

    fn utterance(&self, text: &str, voice: Option<String>) -> Utterance {
        Utterance {
            text: text.to_string(),
            voice,
            lang: self.params.lang.clone(),
            rate: self.params.rate,
            pitch: self.params.pitch,
        }
    }
}

#[async_trait]
impl SpeechPromptPort for VoicePrompt {
    async fn speak(&self, text: &str) -> Result<(), SessionError> {
        let voices = self.backend.voices();
        let Some(voice) = select_voice(&voices) else {
            tracing::debug!("No synthesis voice available, skipping prompt audio");
            return Ok(());
        };
        tracing::trace!(voice = %voice.name, chars = text.len(), "Speaking prompt");

        // Only one utterance plays at a time.
        self.backend.cancel();
        let utterance = self.utterance(text, Some(voice.name.clone()));
        self.backend
            .speak(&utterance)
            .await
            .map_err(|e| SessionError::SynthesisFailure(e.to_string()))
    }
}
