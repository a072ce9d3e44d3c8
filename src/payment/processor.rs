//! Simulated Payment Processing
//!
//! Nothing is charged anywhere. "Processing" a payment means rendering its
//! confirmation line; the caller decides where that line goes.

use super::{helpers::format_amount, models::Payment};
use uuid::Uuid;

/// Stateless payment processor. One shared instance serves the whole run.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Renders the confirmation for `payment` and logs it under a fresh
    /// reference id.
    pub fn process(&self, payment: &Payment) -> String {
        let reference = new_payment_reference();
        tracing::info!(
            %reference,
            mode = %payment.mode(),
            amount = payment.amount(),
            "payment simulated"
        );

        match payment {
            Payment::CashOnDelivery { amount } => self.cash_on_delivery(*amount),
            Payment::CreditCard {
                amount,
                card_number,
            } => self.credit_card(*amount, card_number),
            Payment::NetBanking {
                amount,
                bank_name,
                account_number,
            } => self.net_banking(*amount, bank_name, account_number),
        }
    }

    pub fn cash_on_delivery(&self, amount: f64) -> String {
        format!(
            "Processing cash on delivery payment of ${}",
            format_amount(amount)
        )
    }

    pub fn credit_card(&self, amount: f64, card_number: &str) -> String {
        format!(
            "Processing credit card payment of ${} using card number:{}",
            format_amount(amount),
            card_number
        )
    }

    pub fn net_banking(&self, amount: f64, bank_name: &str, account_number: &str) -> String {
        format!(
            "Processing net banking payment of ${} via {} account number:{}",
            format_amount(amount),
            bank_name,
            account_number
        )
    }
}

/// Creates a new random reference for a simulated payment
pub fn new_payment_reference() -> String {
    Uuid::new_v4().simple().to_string()
}
