//! Menu source port.

use async_trait::async_trait;

use crate::domain::MenuItem;
use crate::ports::GatewayError;

/// Source of the orderable items.
///
/// Implementations report failures; turning a failure into an empty menu is
/// the job of [`MenuCatalog`](crate::services::MenuCatalog).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuSourcePort: Send + Sync {
    /// Fetch the current menu.
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, GatewayError>;
}
