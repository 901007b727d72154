//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the order session expects from
//! infrastructure. They use only domain types; HTTP, audio and terminal
//! details stay in the adapter crates.
//!
//! # Design Rules
//!
//! - No `reqwest` or audio-engine types in any signature
//! - Completion of asynchronous work is expressed as a returned future or a
//!   channel of events, never as a stored callback
//! - Every port is `Send + Sync` so the driver can share it with spawned tasks

pub mod celebration;
pub mod menu_source;
pub mod order_gateway;
pub mod presenter;
pub mod speech;

pub use celebration::{CelebrationPort, NoopCelebration};
pub use menu_source::MenuSourcePort;
pub use order_gateway::{GatewayError, OrderGatewayPort};
pub use presenter::{NoopPresenter, PresenterPort};
pub use speech::{CaptureEvent, CaptureStream, ListenError, ListeningPort, SpeechPromptPort};

#[cfg(test)]
pub use menu_source::MockMenuSourcePort;
#[cfg(test)]
pub use order_gateway::MockOrderGatewayPort;
