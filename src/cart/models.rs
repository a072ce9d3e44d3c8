//! Shopping Cart Domain Models
//!
//! This module contains the data structures related to the shopping cart
//! business domain.

use serde::Serialize;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for items added without one
pub fn default_quantity() -> i32 {
    1
}

/// Represents one priced, quantified entry in the shopping cart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Name of the product
    name: String,

    /// Number of units
    quantity: i32,

    /// Cost of a single unit
    unit_price: i32,
}

impl Item {
    /// Creates a new item. Values are taken as-is, zero and negatives included.
    pub fn new(name: impl Into<String>, quantity: i32, unit_price: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn unit_price(&self) -> i32 {
        self.unit_price
    }

    /// Returns `quantity × unit_price`, widened so it cannot overflow.
    pub fn line_total(&self) -> i64 {
        i64::from(self.quantity) * i64::from(self.unit_price)
    }
}

/// Serializable view of the whole cart, used by the JSON summary
#[derive(Debug, Serialize)]
pub struct CartSnapshot<'a> {
    /// Items in insertion order
    pub items: &'a [Item],

    /// Sum of every item's line total
    pub total: i128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        assert_eq!(Item::new("apple", 3, 4).line_total(), 12);
        assert_eq!(Item::new("free", 5, 0).line_total(), 0);
        assert_eq!(Item::new("refund", -2, 7).line_total(), -14);
    }

    #[test]
    fn test_line_total_does_not_overflow() {
        let item = Item::new("bulk", i32::MAX, i32::MAX);
        assert_eq!(item.line_total(), i64::from(i32::MAX) * i64::from(i32::MAX));
    }

    #[test]
    fn test_accessors() {
        let item = Item::new("banana", 3, 2);
        assert_eq!(item.name(), "banana");
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.unit_price(), 2);
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let value = serde_json::to_value(Item::new("apple", 1, 5)).unwrap();
        assert_eq!(value["name"], "apple");
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["unitPrice"], 5);
    }
}
