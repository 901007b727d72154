//! Core domain types, port definitions and the order session state machine.
//!
//! This crate owns everything that is independent of HTTP and audio:
//!
//! - [`domain`]: menu items, transcripts, order results and receipts
//! - [`ports`]: traits the session drives (menu source, gateway, speech, presenter)
//! - [`services`]: thin services over ports ([`MenuCatalog`])
//! - [`session`]: the [`OrderSession`] transition function and the async [`SessionDriver`]
//! - [`settings`]: session configuration and validation
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod session;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{MenuItem, OrderLine, OrderRequest, OrderResult, Receipt, ReceiptLine, TranscriptCapture};
pub use error::{SessionError, ValidationError};
pub use ports::{
    CaptureEvent, CaptureStream, CelebrationPort, GatewayError, ListenError, ListeningPort,
    MenuSourcePort, NoopCelebration, NoopPresenter, OrderGatewayPort, PresenterPort,
    SpeechPromptPort,
};
pub use services::MenuCatalog;
pub use session::{
    Effect, Generation, OrderSession, SessionConfig, SessionContext, SessionDriver, SessionEvent,
    SessionHandle, SessionPorts, SessionState,
};
pub use settings::{
    DEFAULT_LOCALE, DEFAULT_PROMPT_DELAY_MS, DEFAULT_RESTAURANT_NAME, DEFAULT_SAFETY_REENABLE_MS,
    DEFAULT_SERVER_URL, DEFAULT_SUBMIT_TIMEOUT_SECS, Settings, SettingsError, validate_settings,
};
