//! The order session: state machine, effects and the async driver.
//!
//! ```text
//!   Idle → Preparing → Prompting → Listening → AwaitingConfirmation ⇄ Submitting → Completed
//!                          │
//!                          └→ Failed            (Start from any state → Preparing)
//! ```
//!
//! [`OrderSession`] is a pure transition function: it consumes a
//! [`SessionEvent`], updates its [`SessionContext`] and returns the
//! [`Effect`]s to perform. [`SessionDriver`] performs those effects against
//! the ports and feeds their completions back in as events, each tagged with
//! the [`Generation`] it was issued under.

mod context;
mod driver;
mod effect;
mod event;
mod machine;
pub mod messages;
mod state;

pub use context::{Generation, SessionContext};
pub use driver::{SessionDriver, SessionHandle, SessionPorts};
pub use effect::Effect;
pub use event::SessionEvent;
pub use machine::{OrderSession, SessionConfig};
pub use state::SessionState;
