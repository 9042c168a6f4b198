//! Card network detection from the leading digits of a card number.
//!
//! Prefix classes overlap (`35` would also satisfy a naive `3x` rule), so
//! the match arms are ordered and the first match wins.

use crate::format::strip_formatting;
use crate::CardNetwork;

/// Detects the network from a slice of digit values (0-9).
///
/// ```
/// use card_entry::detect::detect_digits;
/// use card_entry::CardNetwork;
///
/// assert_eq!(detect_digits(&[4, 2, 4, 2]), CardNetwork::Visa);
/// assert_eq!(detect_digits(&[]), CardNetwork::Unknown);
/// ```
#[inline]
pub fn detect_digits(digits: &[u8]) -> CardNetwork {
    match digits {
        [4, ..] => CardNetwork::Visa,
        [5, 1..=5, ..] => CardNetwork::Mastercard,
        [3, 4, ..] | [3, 7, ..] => CardNetwork::Amex,
        [3, 5, ..] => CardNetwork::Jcb,
        [6, 2, ..] => CardNetwork::UnionPay,
        _ => CardNetwork::Unknown,
    }
}

/// Detects the network of a card number as displayed in the form.
///
/// Spaces and any other non-digit characters are ignored. Never fails.
pub fn detect_network(card_display: &str) -> CardNetwork {
    let digits: Vec<u8> = strip_formatting(card_display)
        .bytes()
        .take(2)
        .map(|b| b - b'0')
        .collect();
    detect_digits(&digits)
}
