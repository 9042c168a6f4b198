//! Luhn (mod-10) checksum.
//!
//! This is the only gate before a submission proceeds. Length and
//! network-specific rules are not enforced.

/// Doubled digit values with 9 subtracted when the product exceeds 9.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Computes the Luhn sum (not reduced modulo 10) of a digit slice.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Validates a slice of digit values (0-9).
///
/// An empty slice is invalid.
///
/// ```
/// use card_entry::luhn::validate;
///
/// assert!(validate(&[4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2]));
/// assert!(!validate(&[]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && compute_checksum(digits) % 10 == 0
}

/// Validates a card number as displayed in the form.
///
/// Non-digit characters are ignored. Input with no digits fails.
pub fn luhn_valid(card_display: &str) -> bool {
    let digits: Vec<u8> = card_display
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    validate(&digits)
}
