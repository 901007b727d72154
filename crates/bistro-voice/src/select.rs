//! Deterministic voice selection.

use std::sync::LazyLock;

use regex::Regex;

use crate::backend::VoiceDescriptor;

static FEMALE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)female|woman").ok());
static GOOGLE_ENGLISH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)google.*english").ok());

/// Pick the voice to speak with.
///
/// Preference order: a female voice (by name or reported gender), then an
/// English voice (by name or `en`/`en-*` language tag), then the first voice.
/// Pure over `voices`: the same list always yields the same choice.
pub fn select_voice(voices: &[VoiceDescriptor]) -> Option<&VoiceDescriptor> {
    voices
        .iter()
        .find(|v| is_female(v))
        .or_else(|| voices.iter().find(|v| is_english(v)))
        .or_else(|| voices.first())
}

fn is_female(voice: &VoiceDescriptor) -> bool {
    let gender = voice.gender.map(|g| g.to_string()).unwrap_or_default();
    let haystack = format!("{} {gender}", voice.name);
    FEMALE.as_ref().is_some_and(|re| re.is_match(&haystack))
}

fn is_english(voice: &VoiceDescriptor) -> bool {
    let lang = voice.lang.to_ascii_lowercase();
    lang == "en"
        || lang.starts_with("en-")
        || lang.starts_with("en_")
        || GOOGLE_ENGLISH
            .as_ref()
            .is_some_and(|re| re.is_match(&voice.name))
}
