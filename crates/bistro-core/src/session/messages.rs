//! User-facing texts spoken or shown by the session.

use crate::domain::{MenuItem, format_amount};

pub const PREPARING: &str = "Preparing assistant...";
pub const LISTENING: &str = "Listening... please say your order";
pub const RECOGNIZED: &str =
    "Recognized. Click Confirm to place your order, or press Start again to retry.";
pub const PLACING_ORDER: &str = "Placing your order...";
pub const PLEASE_WAIT: &str = "Please wait...";
pub const NO_ITEMS_TODAY: &str = "No items available today";

/// Spoken rendering of the menu, e.g. `Coke for rupees 45, Sprite for rupees 45`.
pub fn menu_text(menu: &[MenuItem]) -> String {
    if menu.is_empty() {
        return NO_ITEMS_TODAY.to_string();
    }
    menu.iter()
        .map(|item| format!("{} for rupees {}", item.name, format_amount(item.price)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The welcome prompt read before listening.
pub fn welcome_prompt(restaurant: &str, menu: &[MenuItem]) -> String {
    format!(
        "Welcome to {restaurant}. Today's menu: {}. After the tone, please say your order.",
        menu_text(menu)
    )
}

/// The thank-you utterance spoken once an order is saved.
pub fn farewell(total: f64, email_sent: bool) -> String {
    let email = if email_sent {
        "has been sent"
    } else {
        "could not be sent"
    };
    format!(
        "Thank you. Your order has been placed. The total is rupees {}. A confirmation email {email}. Goodbye.",
        format_amount(total)
    )
}

/// Status shown once an order is saved.
pub const fn saved_status(email_sent: bool) -> &'static str {
    if email_sent {
        "Order saved. Email sent."
    } else {
        "Order saved. Email failed to send."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_menu_prompt_says_no_items() {
        let prompt = welcome_prompt("Sunrise Bistro", &[]);
        assert_eq!(
            prompt,
            "Welcome to Sunrise Bistro. Today's menu: No items available today. After the tone, please say your order."
        );
    }

    #[test]
    fn menu_items_are_read_in_order() {
        let menu = [MenuItem::new("Coke", 45.0), MenuItem::new("Mango Juice", 70.0)];
        assert_eq!(
            menu_text(&menu),
            "Coke for rupees 45, Mango Juice for rupees 70"
        );
    }

    #[test]
    fn farewell_names_total_and_email_outcome() {
        let sent = farewell(40.0, true);
        assert!(sent.contains("rupees 40"));
        assert!(sent.contains("has been sent"));

        let failed = farewell(40.0, false);
        assert!(failed.contains("could not be sent"));
    }
}
