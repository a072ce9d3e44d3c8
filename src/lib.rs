//! Shopping Cart Library
//!
//! This library provides the core functionality for a console shopping cart
//! demo: a cart of priced items, a simulated payment processor and the
//! command loop that reads instructions from a line-oriented input.

// Domain modules
pub mod cart;
pub mod command;
pub mod payment;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;

pub use error::CommandError;
