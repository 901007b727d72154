//! Domain types for the ordering flow.
//!
//! These are pure data types with no infrastructure dependencies. Wire
//! shapes live in the gateway adapter and are converted into these types at
//! the boundary.

mod menu;
mod order;
mod transcript;

pub use menu::MenuItem;
pub use order::{OrderLine, OrderRequest, OrderResult, Receipt, ReceiptLine, format_amount};
pub use transcript::TranscriptCapture;
