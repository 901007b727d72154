use serde::{Deserialize, Serialize};

/// An orderable item as published by the menu endpoint.
///
/// Menu items are fetched fresh at the start of every session and never
/// cached across sessions, since prices may change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name, also used by the server when matching the transcript.
    pub name: String,
    /// Unit price in rupees.
    pub price: f64,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
