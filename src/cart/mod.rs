//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Item, snapshot)
//! - The cart itself
//! - Console formatting helpers

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::Item;
pub use state::ShoppingCart;
