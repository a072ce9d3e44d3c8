//! Shopping Cart Formatting Helpers
//!
//! Small pure functions that render cart state as console text.

use super::{models::Item, state::ShoppingCart};

/// Confirmation printed after an item is added.
///
/// Example output:
/// `"Added 3 unit(s) of banana to the shopping cart. Cost per unit: $2."`
pub fn format_added_confirmation(item: &Item) -> String {
    format!(
        "Added {} unit(s) of {} to the shopping cart. Cost per unit: ${}.",
        item.quantity(),
        item.name(),
        item.unit_price()
    )
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"1x apple, 3x banana"`.
pub fn format_item_summary(items: &[Item]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity(), i.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line cart total used by the text summary
pub fn format_cart_summary(cart: &ShoppingCart) -> String {
    if cart.is_empty() {
        return "Cart total: $0 (empty cart)".to_string();
    }

    format!(
        "Cart total: ${} ({} item(s): {})",
        cart.calculate_total(),
        cart.len(),
        format_item_summary(cart.items())
    )
}
