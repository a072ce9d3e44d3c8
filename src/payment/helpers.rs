//! Payment Formatting Helpers
//!
//! Money is printed from the shortest decimal form of the amount, rounded
//! half-up to two places, so `2.675` prints as `2.68` even though the nearest
//! `f64` lies slightly below it.

/// Renders `amount` with exactly two decimals.
///
/// Non-finite amounts render as `NaN`, `Infinity` and `-Infinity`.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount.is_sign_negative() { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    // `Display` for f64 yields the shortest round-trip digits, never an exponent
    let shortest = amount.abs().to_string();
    let (whole, fraction) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - 2;
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!(
        "{}{}.{}",
        sign,
        ascii(&digits[..split]),
        ascii(&digits[split..])
    )
}

/// Adds one unit in the last place, carrying through nines
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn ascii(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(d)).collect()
}
