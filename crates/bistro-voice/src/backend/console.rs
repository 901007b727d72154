//! Terminal synthesis backend: prints utterances instead of playing audio.

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{SynthesisBackend, Utterance, VoiceDescriptor, VoiceGender};
use crate::error::VoiceError;

/// Prints each utterance on its own line, optionally pausing for roughly
/// as long as reading it aloud would take.
pub struct ConsoleSynthesizer<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    voices: Vec<VoiceDescriptor>,
    words_per_minute: Option<u32>,
}

impl ConsoleSynthesizer {
    /// Synthesizer writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSynthesizer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            voices: vec![
                VoiceDescriptor::new("Console English (India)", "en-IN")
                    .with_gender(VoiceGender::Female),
            ],
            words_per_minute: None,
        }
    }

    /// Replace the advertised voice list.
    #[must_use]
    pub fn with_voices(mut self, voices: Vec<VoiceDescriptor>) -> Self {
        self.voices = voices;
        self
    }

    /// Pause after printing, paced at `wpm` words per minute scaled by rate.
    #[must_use]
    pub const fn with_words_per_minute(mut self, wpm: u32) -> Self {
        self.words_per_minute = Some(wpm);
        self
    }

    /// Consume the synthesizer and return its writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn reading_time(&self, utterance: &Utterance) -> Option<Duration> {
        let wpm = self.words_per_minute.filter(|wpm| *wpm > 0)?;
        let words = u32::try_from(utterance.text.split_whitespace().count()).unwrap_or(u32::MAX);
        let rate = f64::from(utterance.rate).max(0.1);
        Some(Duration::from_secs_f64(
            f64::from(words) * 60.0 / (f64::from(wpm) * rate),
        ))
    }
}

#[async_trait]
impl<W: Write + Send> SynthesisBackend for ConsoleSynthesizer<W> {
    fn voices(&self) -> Vec<VoiceDescriptor> {
        self.voices.clone()
    }

    async fn speak(&self, utterance: &Utterance) -> Result<(), VoiceError> {
        {
            let mut out = self
                .out
                .lock()
                .map_err(|_| VoiceError::SynthesisError("output lock poisoned".to_string()))?;
            writeln!(out, "🔊 {}", utterance.text)?;
            out.flush()?;
        }

        if let Some(pause) = self.reading_time(utterance) {
            tokio::time::sleep(pause).await;
        }
        Ok(())
    }
}
