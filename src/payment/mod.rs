//! Payment Module
//!
//! Payment models and the stateless processor that renders confirmations.

pub mod helpers;
pub mod models;
pub mod processor;

pub use models::{Payment, PaymentMode};
pub use processor::PaymentProcessor;
