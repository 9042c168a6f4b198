//! Keystroke masking for the card number, expiry and CVC fields.
//!
//! Every function here is total: it accepts whatever the user typed and
//! returns the canonical display form. Non-digit characters are dropped.
//!
//! ```
//! use card_entry::format::{format_card_number, format_cvc, format_expiry};
//!
//! assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
//! assert_eq!(format_expiry("1230"), "12 / 30");
//! assert_eq!(format_cvc("12a345"), "1234");
//! ```

/// Maximum number of CVC digits kept.
pub const MAX_CVC_DIGITS: usize = 4;

/// Separator placed between the month and year of an expiry date.
pub const EXPIRY_SEPARATOR: &str = " / ";

/// Removes every non-digit character.
///
/// ```
/// use card_entry::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111-1111 abc"), "41111111");
/// ```
#[inline]
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups the digits of a card number in fours separated by single spaces.
///
/// A trailing partial group is kept as it is. The output never has
/// leading or trailing whitespace, so formatting is idempotent.
pub fn format_card_number(raw: &str) -> String {
    let digits = strip_formatting(raw);
    let mut result = String::with_capacity(digits.len() + digits.len() / 4);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Formats an expiry date as `MM / YY`.
///
/// With two digits or fewer the digits are returned alone, which is the
/// partial-typing state. Length limiting is left to the input control.
pub fn format_expiry(raw: &str) -> String {
    let digits = strip_formatting(raw);
    if digits.len() < 3 {
        return digits;
    }

    let (month, year) = digits.split_at(2);
    let mut result = String::with_capacity(digits.len() + EXPIRY_SEPARATOR.len());
    result.push_str(month);
    result.push_str(EXPIRY_SEPARATOR);
    result.push_str(year);
    result
}

/// Keeps at most [`MAX_CVC_DIGITS`] digits of a CVC.
pub fn format_cvc(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_CVC_DIGITS)
        .collect()
}
