//! Menu command handler.

use anyhow::Result;
use bistro_core::domain::format_amount;

use crate::bootstrap::CliContext;

/// Fetch today's menu and print it.
///
/// A failed fetch prints the same empty menu a session would announce;
/// run with `-v` to see why.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let items = ctx.menu().load().await;

    if items.is_empty() {
        println!("No items available today");
        return Ok(());
    }

    println!("Today's menu ({} items):\n", items.len());
    for item in &items {
        println!("  {:<28} ₹{}", item.name, format_amount(item.price));
    }
    Ok(())
}
