//! Payment Models
//!
//! One variant per payment mode. The mode is fixed at the parsing boundary by
//! how many fields the command carried.

use std::fmt;

/// A payment request for one of the supported payment modes
#[derive(Debug, Clone, PartialEq)]
pub enum Payment {
    /// Amount only
    CashOnDelivery { amount: f64 },

    /// Amount and a card number
    CreditCard { amount: f64, card_number: String },

    /// Amount, bank name and account number
    NetBanking {
        amount: f64,
        bank_name: String,
        account_number: String,
    },
}

impl Payment {
    pub fn amount(&self) -> f64 {
        match self {
            Payment::CashOnDelivery { amount }
            | Payment::CreditCard { amount, .. }
            | Payment::NetBanking { amount, .. } => *amount,
        }
    }

    pub fn mode(&self) -> PaymentMode {
        match self {
            Payment::CashOnDelivery { .. } => PaymentMode::CashOnDelivery,
            Payment::CreditCard { .. } => PaymentMode::CreditCard,
            Payment::NetBanking { .. } => PaymentMode::NetBanking,
        }
    }
}

/// Payment mode tag, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMode {
    CashOnDelivery,
    CreditCard,
    NetBanking,
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMode::CashOnDelivery => "cash-on-delivery",
            PaymentMode::CreditCard => "credit-card",
            PaymentMode::NetBanking => "net-banking",
        };
        f.write_str(name)
    }
}
