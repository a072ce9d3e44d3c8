//! Command Line Parser
//!
//! Turns one raw input line into a [`Parsed`] value. Token count is checked
//! before any numeric field is parsed, so a line with the wrong shape is
//! ignored even when its numbers are garbage.

use super::models::*;
use crate::error::CommandError;
use crate::payment::Payment;

/// Parses one input line
pub fn parse_line(line: &str) -> Result<Parsed, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some((&command, args)) = tokens.split_first() else {
        return Ok(Parsed::Ignored(IgnoreReason::Blank));
    };

    match command {
        ADD_ITEM_COMMAND => parse_add_item(args),
        PROCESS_PAYMENT_COMMAND => parse_process_payment(args),
        other => Ok(Parsed::Ignored(IgnoreReason::UnknownCommand(
            other.to_string(),
        ))),
    }
}

fn parse_add_item(args: &[&str]) -> Result<Parsed, CommandError> {
    let add = match *args {
        [name, price] => AddItem::Single {
            name: name.to_string(),
            unit_price: parse_integer("price", price)?,
        },
        [quantity, name, price] => AddItem::WithQuantity {
            quantity: parse_integer("quantity", quantity)?,
            name: name.to_string(),
            unit_price: parse_integer("price", price)?,
        },
        _ => return Ok(wrong_arity(ADD_ITEM_COMMAND, args)),
    };

    Ok(Parsed::Command(Command::AddItem(add)))
}

fn parse_process_payment(args: &[&str]) -> Result<Parsed, CommandError> {
    let payment = match *args {
        [amount] => Payment::CashOnDelivery {
            amount: parse_decimal("amount", amount)?,
        },
        [amount, card_number] => Payment::CreditCard {
            amount: parse_decimal("amount", amount)?,
            card_number: card_number.to_string(),
        },
        [amount, bank_name, account_number] => Payment::NetBanking {
            amount: parse_decimal("amount", amount)?,
            bank_name: bank_name.to_string(),
            account_number: account_number.to_string(),
        },
        _ => return Ok(wrong_arity(PROCESS_PAYMENT_COMMAND, args)),
    };

    Ok(Parsed::Command(Command::ProcessPayment(payment)))
}

fn wrong_arity(command: &'static str, args: &[&str]) -> Parsed {
    Parsed::Ignored(IgnoreReason::WrongArity {
        command,
        tokens: args.len() + 1,
    })
}

fn parse_integer(field: &'static str, token: &str) -> Result<i32, CommandError> {
    token.parse().map_err(|_| CommandError::MalformedNumber {
        field,
        expected: "integer",
        token: token.to_string(),
    })
}

/// Accepts plain and exponent notation with an optional `f`/`d` suffix, plus
/// the exact words `Infinity` and `NaN`. Rust-only spellings such as `inf`
/// or `nan` are malformed.
fn parse_decimal(field: &'static str, token: &str) -> Result<f64, CommandError> {
    let malformed = || CommandError::MalformedNumber {
        field,
        expected: "decimal",
        token: token.to_string(),
    };

    let negative = token.starts_with('-');
    let unsigned = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);

    let magnitude = match unsigned {
        "Infinity" => f64::INFINITY,
        "NaN" => f64::NAN,
        _ => {
            let numeric = unsigned
                .strip_suffix(&['f', 'F', 'd', 'D'][..])
                .unwrap_or(unsigned);
            if !numeric.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return Err(malformed());
            }
            numeric.parse::<f64>().map_err(|_| malformed())?
        }
    };

    Ok(if negative { -magnitude } else { magnitude })
}
