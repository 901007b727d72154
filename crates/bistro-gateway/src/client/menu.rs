//! `GET /api/menu`.

use crate::client::BistroClient;
use crate::error::HttpResult;
use crate::http::HttpBackend;
use crate::models::MenuItemWire;

const MENU_PATH: &str = "api/menu";

impl<B: HttpBackend> BistroClient<B> {
    /// Fetch the current menu.
    pub async fn fetch_menu_items(&self) -> HttpResult<Vec<MenuItemWire>> {
        let url = self.endpoint(MENU_PATH)?;
        let items: Vec<MenuItemWire> = self.backend.get_json(&url).await?;
        tracing::debug!(count = items.len(), "Menu fetched");
        Ok(items)
    }
}
