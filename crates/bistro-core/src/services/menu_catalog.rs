//! Menu catalog: fetches the orderable items for a session.

use std::sync::Arc;

use crate::domain::MenuItem;
use crate::ports::MenuSourcePort;

/// Stateless menu loader, re-queried at the start of every session.
#[derive(Clone)]
pub struct MenuCatalog {
    source: Arc<dyn MenuSourcePort>,
}

impl MenuCatalog {
    pub fn new(source: Arc<dyn MenuSourcePort>) -> Self {
        Self { source }
    }

    /// Load the menu.
    ///
    /// Any failure is logged and resolves to an empty menu; it is never
    /// fatal to the session. Items with a non-positive or non-finite price
    /// are dropped.
    pub async fn load(&self) -> Vec<MenuItem> {
        match self.source.fetch_menu().await {
            Ok(items) => {
                let total = items.len();
                let valid: Vec<MenuItem> = items
                    .into_iter()
                    .filter(|item| item.price.is_finite() && item.price > 0.0)
                    .collect();
                if valid.len() != total {
                    tracing::warn!(
                        dropped = total - valid.len(),
                        "Ignoring menu items without a positive price"
                    );
                }
                tracing::debug!(items = valid.len(), "Menu loaded");
                valid
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load menu");
                Vec::new()
            }
        }
    }
}
