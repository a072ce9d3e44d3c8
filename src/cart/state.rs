//! Shopping Cart State Management
//!
//! The cart lives for the whole run and only ever grows.

use super::models::{default_quantity, CartSnapshot, Item};

// =============================================================================
// Shopping Cart
// =============================================================================

/// Ordered collection of the items added during a run
#[derive(Debug, Default)]
pub struct ShoppingCart {
    /// Items in insertion order
    items: Vec<Item>,
}

impl ShoppingCart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single unit of `name`. Same as `add_item_with_quantity(1, ..)`.
    pub fn add_item(&mut self, name: impl Into<String>, unit_price: i32) -> &Item {
        self.add_item_with_quantity(default_quantity(), name, unit_price)
    }

    /// Appends a new item and returns a reference to it
    pub fn add_item_with_quantity(
        &mut self,
        quantity: i32,
        name: impl Into<String>,
        unit_price: i32,
    ) -> &Item {
        let item = Item::new(name, quantity, unit_price);
        tracing::debug!(
            name = item.name(),
            quantity = item.quantity(),
            unit_price = item.unit_price(),
            "item added to cart"
        );
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Sums every item's line total. Recomputed on each call.
    ///
    /// Accumulates in `i128`: each line total fits in `i64`, their sum may not.
    pub fn calculate_total(&self) -> i128 {
        self.items
            .iter()
            .map(|item| i128::from(item.line_total()))
            .sum()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the cart as a serializable snapshot
    pub fn snapshot(&self) -> CartSnapshot<'_> {
        CartSnapshot {
            items: &self.items,
            total: self.calculate_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = ShoppingCart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.calculate_total(), 0);
    }

    #[test]
    fn test_add_item_defaults_quantity_to_one() {
        let mut single = ShoppingCart::new();
        let added = single.add_item("apple", 5);
        assert_eq!(added.quantity(), 1);

        let mut explicit = ShoppingCart::new();
        explicit.add_item_with_quantity(1, "apple", 5);

        assert_eq!(single.calculate_total(), explicit.calculate_total());
        assert_eq!(single.items(), explicit.items());
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let mut cart = ShoppingCart::new();
        cart.add_item("apple", 5);
        cart.add_item_with_quantity(3, "banana", 2);
        assert_eq!(cart.calculate_total(), 11);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_total_ignores_insertion_order() {
        let entries = [(2, "pear", 7), (1, "fig", 3), (4, "kiwi", 1)];

        let mut forward = ShoppingCart::new();
        for (quantity, name, price) in entries {
            forward.add_item_with_quantity(quantity, name, price);
        }

        let mut reverse = ShoppingCart::new();
        for (quantity, name, price) in entries.into_iter().rev() {
            reverse.add_item_with_quantity(quantity, name, price);
        }

        assert_eq!(forward.calculate_total(), 21);
        assert_eq!(forward.calculate_total(), reverse.calculate_total());
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = ShoppingCart::new();
        cart.add_item("apple", 5);
        cart.add_item("apple", 5);
        cart.add_item("banana", 2);

        let names: Vec<&str> = cart.items().iter().map(Item::name).collect();
        assert_eq!(names, ["apple", "apple", "banana"]);
    }

    #[test]
    fn test_total_of_max_items_does_not_overflow() {
        let mut cart = ShoppingCart::new();
        for _ in 0..3 {
            cart.add_item_with_quantity(i32::MAX, "bulk", i32::MAX);
        }

        let line = i128::from(i32::MAX) * i128::from(i32::MAX);
        assert_eq!(cart.calculate_total(), 3 * line);
        assert_eq!(cart.calculate_total(), 13_835_058_042_397_261_827);
    }

    #[test]
    fn test_snapshot_serializes_items_and_total() {
        let mut cart = ShoppingCart::new();
        cart.add_item_with_quantity(3, "banana", 2);

        let json = serde_json::to_value(cart.snapshot()).unwrap();
        assert_eq!(json["total"], 6);
        assert_eq!(json["items"][0]["name"], "banana");
        assert_eq!(json["items"][0]["quantity"], 3);
    }
}
