//! Masking helpers for notices and log lines.
//!
//! Only the last four digits of a card number are ever shown.

/// Returns the last four digits of a card number (fewer if it is shorter).
#[inline]
pub fn last_four(card: &str) -> String {
    let digits: Vec<char> = card.chars().filter(|c| c.is_ascii_digit()).collect();
    let start = digits.len().saturating_sub(4);
    digits[start..].iter().collect()
}

/// Masks a card number as `**** 4242`.
///
/// ```
/// use card_entry::mask::mask_card;
///
/// assert_eq!(mask_card("4242 4242 4242 4242"), "**** 4242");
/// assert_eq!(mask_card(""), "****");
/// ```
pub fn mask_card(card: &str) -> String {
    let tail = last_four(card);
    if tail.is_empty() {
        "****".to_string()
    } else {
        format!("**** {}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("4242 4242 4242 1234"), "1234");
        assert_eq!(last_four("42"), "42");
        assert_eq!(last_four(""), "");
    }

    #[test]
    fn test_mask_never_contains_full_number() {
        let masked = mask_card("4242424242424242");
        assert!(!masked.contains("42424242"));
        assert!(masked.ends_with("4242"));
    }
}
