//! Command Models and Constants
//!
//! Typed form of one input line. Which variant a line becomes is decided by
//! its first token and its token count, nothing else.

use crate::payment::Payment;

// =============================================================================
// Command Constants
// =============================================================================

/// First token of an add-item line
pub const ADD_ITEM_COMMAND: &str = "addItem";
/// First token of a payment line
pub const PROCESS_PAYMENT_COMMAND: &str = "processPayment";

// =============================================================================
// Command Models
// =============================================================================

/// Add-item request, by shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddItem {
    /// `addItem <name> <price>`
    Single { name: String, unit_price: i32 },

    /// `addItem <quantity> <name> <price>`
    WithQuantity {
        quantity: i32,
        name: String,
        unit_price: i32,
    },
}

/// A recognized command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddItem(AddItem),
    ProcessPayment(Payment),
}

/// Why a line was dropped without output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Nothing but whitespace
    Blank,

    /// First token is not a known command
    UnknownCommand(String),

    /// Known command, but no shape takes this many tokens
    WrongArity {
        command: &'static str,
        tokens: usize,
    },
}

/// Result of parsing one line
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Command(Command),
    Ignored(IgnoreReason),
}

/// What handling one line produced
#[derive(Debug)]
pub enum Outcome {
    /// The command ran; this is its confirmation line
    Printed(String),

    /// The line was dropped on purpose
    Ignored(IgnoreReason),

    /// A numeric field was malformed and the skip policy is active
    Skipped(crate::error::CommandError),
}

/// Line counters for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub lines_read: usize,
    pub commands_applied: usize,
    pub lines_ignored: usize,
    pub lines_skipped: usize,
}
