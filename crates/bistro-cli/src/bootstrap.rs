//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Menu and order gateway (via bistro-gateway)
//! - Speech synthesis and typed recognition (via bistro-voice)
//! - Terminal presentation and confetti (this crate)
//!
//! Command handlers receive the composed `CliContext` and build sessions from it.

use std::sync::Arc;

use anyhow::Result;
use bistro_core::{
    MenuCatalog, SessionDriver, SessionHandle, SessionPorts, Settings, validate_settings,
};
use bistro_gateway::{DefaultBistroClient, GatewayConfig};
use bistro_voice::{
    ConsoleSynthesizer, ListeningSession, RecognitionConfig, SpeechParams, TypedFeed,
    TypedRecognizer, VoicePrompt,
};

use crate::commands::{OrderArgs, ServerArgs};
use crate::error::CliError;
use crate::presentation::{TerminalConfetti, TerminalPresenter};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Session and gateway settings.
    pub settings: Settings,
    /// Email pre-filled into the confirmation field.
    pub email: Option<String>,
    /// Pace for printed prompts; `None` prints without pausing.
    pub speak_wpm: Option<u32>,
}

impl CliConfig {
    /// Create config with default settings.
    pub fn with_defaults() -> Self {
        Self {
            settings: Settings::with_defaults(),
            email: None,
            speak_wpm: None,
        }
    }

    /// Config for commands that only talk to the server.
    pub fn from_server_args(args: &ServerArgs) -> Result<Self, CliError> {
        let mut config = Self::with_defaults();
        config.apply_server_args(args);
        validate_settings(&config.settings)?;
        Ok(config)
    }

    /// Config for `bistro order`.
    pub fn from_order_args(args: &OrderArgs) -> Result<Self, CliError> {
        let mut config = Self::with_defaults();
        config.apply_server_args(&args.server);
        if let Some(locale) = &args.locale {
            config.settings.locale = Some(locale.trim().to_string());
        }
        if let Some(name) = &args.restaurant_name {
            config.settings.restaurant_name = Some(name.trim().to_string());
        }
        config.email = args
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string);
        config.speak_wpm = args.speak_wpm;

        validate_settings(&config.settings)?;
        Ok(config)
    }

    fn apply_server_args(&mut self, args: &ServerArgs) {
        if let Some(url) = &args.server_url {
            self.settings.server_url = Some(url.trim().to_string());
        }
        if let Some(secs) = args.timeout_secs {
            self.settings.submit_timeout_secs = Some(secs);
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Effective settings.
    pub settings: Settings,
    /// Email pre-filled into new sessions.
    pub email: Option<String>,
    /// Pace for printed prompts.
    pub speak_wpm: Option<u32>,
    /// HTTP client for the menu and order endpoints.
    pub gateway: Arc<DefaultBistroClient>,
    /// Menu loader over the gateway.
    pub menu: MenuCatalog,
}

/// Everything `bistro order` needs to run one interactive session.
pub struct OrderSessionParts {
    /// The driver; spawn `driver.run()` on the runtime.
    pub driver: SessionDriver,
    /// Handle for start/confirm/shutdown.
    pub handle: SessionHandle,
    /// Where typed lines are fed to the recognizer.
    pub feed: TypedFeed,
    /// Presenter holding the email field and confirm flag.
    pub presenter: Arc<TerminalPresenter>,
}

impl CliContext {
    /// Access the menu catalog.
    pub const fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    /// Wire a fresh order session: console speech, typed recognition,
    /// terminal output, all sharing this context's gateway.
    pub fn order_session(&self) -> OrderSessionParts {
        let synthesizer = match self.speak_wpm {
            Some(wpm) => ConsoleSynthesizer::stdout().with_words_per_minute(wpm),
            None => ConsoleSynthesizer::stdout(),
        };
        let prompt = VoicePrompt::new(
            Arc::new(synthesizer),
            SpeechParams::from_settings(&self.settings),
        );

        let (recognizer, feed) = TypedRecognizer::new();
        let listening = ListeningSession::new(
            Arc::new(recognizer),
            RecognitionConfig::for_locale(self.settings.effective_locale()),
        );

        let presenter = Arc::new(TerminalPresenter::stdout());
        if let Some(email) = &self.email {
            presenter.set_email(email.clone());
        }

        let ports = SessionPorts {
            menu: self.menu.clone(),
            gateway: self.gateway.clone(),
            prompt: Arc::new(prompt),
            listening: Arc::new(listening),
            presenter: presenter.clone(),
            celebration: Arc::new(TerminalConfetti::stdout()),
        };
        let (driver, handle) = SessionDriver::new(self.settings.session_config(), ports);

        OrderSessionParts {
            driver,
            handle,
            feed,
            presenter,
        }
    }
}

/// Bootstrap the CLI application.
///
/// Builds the gateway client from the settings and the menu catalog over it.
/// No request is made here.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let gateway_config = GatewayConfig::new()
        .with_base_url(config.settings.effective_server_url())
        .with_timeout(config.settings.effective_submit_timeout());
    let gateway = Arc::new(DefaultBistroClient::new(&gateway_config).map_err(CliError::from)?);
    let menu = MenuCatalog::new(gateway.clone());

    tracing::debug!(
        server = config.settings.effective_server_url(),
        locale = config.settings.effective_locale(),
        "CLI context ready"
    );

    Ok(CliContext {
        settings: config.settings,
        email: config.email,
        speak_wpm: config.speak_wpm,
        gateway,
        menu,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_args_override_defaults() {
        let args = OrderArgs {
            server: ServerArgs {
                server_url: Some(" http://10.0.0.5:5000 ".to_string()),
                timeout_secs: Some(5),
            },
            email: Some("  ".to_string()),
            locale: Some("en-GB".to_string()),
            restaurant_name: Some("Harbour Grill".to_string()),
            speak_wpm: Some(180),
        };

        let config = CliConfig::from_order_args(&args).unwrap();
        assert_eq!(config.settings.effective_server_url(), "http://10.0.0.5:5000");
        assert_eq!(config.settings.submit_timeout_secs, Some(5));
        assert_eq!(config.settings.effective_locale(), "en-GB");
        assert_eq!(config.settings.effective_restaurant_name(), "Harbour Grill");
        assert_eq!(config.email, None);
        assert_eq!(config.speak_wpm, Some(180));
    }

    #[test]
    fn test_invalid_server_url_is_config_error() {
        let args = ServerArgs {
            server_url: Some("ftp://menu".to_string()),
            timeout_secs: None,
        };
        let err = CliConfig::from_server_args(&args).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_bootstrap_wires_context() {
        let mut config = CliConfig::with_defaults();
        config.email = Some("guest@example.com".to_string());

        let ctx = bootstrap(config).unwrap();
        assert_eq!(ctx.email.as_deref(), Some("guest@example.com"));

        let parts = ctx.order_session();
        assert_eq!(parts.presenter.email(), "guest@example.com");
        assert!(!parts.feed.is_listening());
    }
}
