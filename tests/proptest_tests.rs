//! Property-based tests for the pure formatting and checksum functions.

use card_entry::{format_card_number, format_cvc, format_expiry, luhn, luhn_valid};
use proptest::prelude::*;

/// Independent mod-10 reference over a digit string.
fn reference_luhn(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut sum = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let mut d = c.to_digit(10).unwrap();
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    sum % 10 == 0
}

fn digit_string(max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), 0..=max)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn luhn_matches_reference(digits in digit_string(24)) {
        prop_assert_eq!(luhn_valid(&digits), reference_luhn(&digits));
    }

    #[test]
    fn luhn_ignores_display_spacing(digits in digit_string(19)) {
        let formatted = format_card_number(&digits);
        prop_assert_eq!(luhn_valid(&formatted), luhn_valid(&digits));
    }

    #[test]
    fn appending_check_digit_makes_valid(digits in digit_string(18)) {
        let mut values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
        values.push(0);
        let sum = luhn::compute_checksum(&values);
        let check = (10 - sum % 10) % 10;
        let full = format!("{}{}", digits, check);
        prop_assert!(luhn_valid(&full));
    }

    #[test]
    fn card_format_is_idempotent(raw in ".{0,40}") {
        let once = format_card_number(&raw);
        prop_assert_eq!(format_card_number(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn card_groups_are_four_wide(digits in digit_string(24)) {
        let formatted = format_card_number(&digits);
        let groups: Vec<&str> = formatted.split(' ').filter(|g| !g.is_empty()).collect();
        if let Some((last, rest)) = groups.split_last() {
            prop_assert!(rest.iter().all(|g| g.len() == 4));
            prop_assert!(last.len() <= 4);
        }
    }

    #[test]
    fn expiry_separator_only_after_two_digits(digits in digit_string(6)) {
        let formatted = format_expiry(&digits);
        prop_assert_eq!(formatted.contains(" / "), digits.len() >= 3);
        prop_assert_eq!(format_expiry(&formatted), formatted.clone());
    }

    #[test]
    fn cvc_never_exceeds_four(raw in ".{0,20}") {
        let cvc = format_cvc(&raw);
        prop_assert!(cvc.len() <= 4);
        prop_assert!(cvc.bytes().all(|b| b.is_ascii_digit()));
    }
}
