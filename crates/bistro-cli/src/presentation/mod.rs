//! Terminal presentation: the visible surface of an order session.
//!
//! Keep this module format-only; session logic lives in `bistro-core`.

pub mod confetti;
pub mod terminal;

pub use confetti::TerminalConfetti;
pub use terminal::TerminalPresenter;
