//! Command Module
//!
//! This module contains the line-oriented command interface, including:
//! - Command models (Command, AddItem, IgnoreReason, constants)
//! - The line parser
//! - The command loop that drives a run

pub mod handlers;
pub mod models;
pub mod parser;

// Re-export commonly used types and functions
pub use handlers::CommandLoop;
pub use models::{Command, Outcome, Parsed, RunReport};
pub use parser::parse_line;
