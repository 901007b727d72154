//! Settings domain types and validation.
//!
//! All fields are optional so partial configuration (flags, env, files)
//! can be layered; the `effective_*` accessors supply defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::SessionConfig;

/// Default base URL of the ordering server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Default recognition locale.
pub const DEFAULT_LOCALE: &str = "en-IN";

/// Default restaurant name used in the welcome prompt.
pub const DEFAULT_RESTAURANT_NAME: &str = "Sunrise Bistro";

/// Pause between the menu loading and the welcome prompt.
pub const DEFAULT_PROMPT_DELAY_MS: u64 = 300;

/// Delay after a submission resolves before the confirm control is forced back on.
pub const DEFAULT_SAFETY_REENABLE_MS: u64 = 1500;

/// Upper bound on a single gateway request.
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 15;

/// Default speech rate multiplier.
pub const DEFAULT_SPEECH_RATE: f32 = 1.0;

/// Default speech pitch multiplier.
pub const DEFAULT_SPEECH_PITCH: f32 = 1.05;

/// Application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the server exposing `/api/menu` and `/api/order`.
    pub server_url: Option<String>,

    /// Recognition locale (BCP-47).
    pub locale: Option<String>,

    /// Restaurant name spoken in the welcome prompt.
    pub restaurant_name: Option<String>,

    /// Delay before the welcome prompt, in milliseconds.
    pub prompt_delay_ms: Option<u64>,

    /// Safety re-enable delay for the confirm control, in milliseconds.
    pub safety_reenable_ms: Option<u64>,

    /// Gateway request timeout, in seconds.
    pub submit_timeout_secs: Option<u64>,

    /// Speech rate multiplier (0.5–2.0).
    pub speech_rate: Option<f32>,

    /// Speech pitch multiplier (0.5–2.0).
    pub speech_pitch: Option<f32>,
}

impl Settings {
    /// Create settings with every field populated by its default.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            server_url: Some(DEFAULT_SERVER_URL.to_string()),
            locale: Some(DEFAULT_LOCALE.to_string()),
            restaurant_name: Some(DEFAULT_RESTAURANT_NAME.to_string()),
            prompt_delay_ms: Some(DEFAULT_PROMPT_DELAY_MS),
            safety_reenable_ms: Some(DEFAULT_SAFETY_REENABLE_MS),
            submit_timeout_secs: Some(DEFAULT_SUBMIT_TIMEOUT_SECS),
            speech_rate: Some(DEFAULT_SPEECH_RATE),
            speech_pitch: Some(DEFAULT_SPEECH_PITCH),
        }
    }

    #[must_use]
    pub fn effective_server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    #[must_use]
    pub fn effective_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    #[must_use]
    pub fn effective_restaurant_name(&self) -> &str {
        self.restaurant_name
            .as_deref()
            .unwrap_or(DEFAULT_RESTAURANT_NAME)
    }

    #[must_use]
    pub fn effective_prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms.unwrap_or(DEFAULT_PROMPT_DELAY_MS))
    }

    #[must_use]
    pub fn effective_safety_delay(&self) -> Duration {
        Duration::from_millis(self.safety_reenable_ms.unwrap_or(DEFAULT_SAFETY_REENABLE_MS))
    }

    #[must_use]
    pub fn effective_submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs.unwrap_or(DEFAULT_SUBMIT_TIMEOUT_SECS))
    }

    #[must_use]
    pub fn effective_speech_rate(&self) -> f32 {
        self.speech_rate.unwrap_or(DEFAULT_SPEECH_RATE)
    }

    #[must_use]
    pub fn effective_speech_pitch(&self) -> f32 {
        self.speech_pitch.unwrap_or(DEFAULT_SPEECH_PITCH)
    }

    /// The subset of settings the session state machine needs.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            restaurant_name: self.effective_restaurant_name().to_string(),
            prompt_delay: self.effective_prompt_delay(),
            safety_delay: self.effective_safety_delay(),
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Server URL must start with http:// or https://, got '{0}'")]
    InvalidServerUrl(String),

    #[error("Locale cannot be empty")]
    EmptyLocale,

    #[error("Restaurant name cannot be empty")]
    EmptyRestaurantName,

    #[error("Safety re-enable delay must be between 100 and 60000 ms, got {0}")]
    InvalidSafetyDelay(u64),

    #[error("Submit timeout must be between 1 and 300 seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("Speech {name} must be between 0.5 and 2.0, got {value}")]
    InvalidSpeechParameter { name: &'static str, value: f32 },
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(url) = &settings.server_url {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SettingsError::InvalidServerUrl(url.to_string()));
        }
    }

    if settings.locale.as_ref().is_some_and(|l| l.trim().is_empty()) {
        return Err(SettingsError::EmptyLocale);
    }

    if settings
        .restaurant_name
        .as_ref()
        .is_some_and(|n| n.trim().is_empty())
    {
        return Err(SettingsError::EmptyRestaurantName);
    }

    if let Some(ms) = settings.safety_reenable_ms {
        if !(100..=60_000).contains(&ms) {
            return Err(SettingsError::InvalidSafetyDelay(ms));
        }
    }

    if let Some(secs) = settings.submit_timeout_secs {
        if !(1..=300).contains(&secs) {
            return Err(SettingsError::InvalidTimeout(secs));
        }
    }

    for (name, value) in [("rate", settings.speech_rate), ("pitch", settings.speech_pitch)] {
        if let Some(value) = value {
            if !(0.5..=2.0).contains(&value) {
                return Err(SettingsError::InvalidSpeechParameter { name, value });
            }
        }
    }

    Ok(())
}
