//! Shop-name rules.
//!
//! [`validate_shop_name`] applies the local rules in a fixed precedence
//! order and stops at the first failure:
//!
//! | Order | Rule                            | Failure                                    |
//! |-------|---------------------------------|--------------------------------------------|
//! | 1     | text is empty                   | [`ShopError::Empty`]                       |
//! | 2     | any scalar is an emoji          | [`ShopError::ContainsEmoji`]               |
//! | 3     | first or last char is whitespace| [`ShopError::LeadingOrTrailingWhitespace`] |
//! | 4     | fewer than the minimum chars    | [`ShopError::TooShort`]                    |
//!
//! The order matters: `" 😄"` reports `ContainsEmoji`, not whitespace or
//! length.  The availability lookup is not part of this module.
//!
//! Length is measured in visible characters: combining marks, variation
//! selectors and joiners attach to the preceding character, so `"e\u{301}"`
//! counts as one.

use std::ops::RangeInclusive;

use crate::domain::error::ShopError;
use crate::rules::emoji::contains_emoji;

/// Minimum number of visible characters a shop name must have.
pub const MIN_SHOP_NAME_CHARS: usize = 3;

/// Applies the local shop-name rules to the raw, untrimmed `text`.
///
/// # Errors
///
/// Returns the first [`ShopError`] in precedence order.  `Ok(())` means the
/// name may proceed to the availability lookup.
pub fn validate_shop_name(text: &str, min_chars: usize) -> Result<(), ShopError> {
    if text.is_empty() {
        return Err(ShopError::Empty);
    }
    if contains_emoji(text) {
        return Err(ShopError::ContainsEmoji);
    }
    if has_surrounding_whitespace(text) {
        return Err(ShopError::LeadingOrTrailingWhitespace);
    }
    if visible_char_count(text) < min_chars {
        return Err(ShopError::TooShort);
    }
    Ok(())
}

/// Builds the domain name suggested for `shop_name`: `<shop_name>-<city_id>`.
///
/// The suggestion is purely textual and is produced for invalid names too.
pub fn suggest_domain_name(shop_name: &str, city_id: &str) -> String {
    format!("{shop_name}-{city_id}")
}

/// Code points that never start a character of their own.
const ATTACHED_RANGES: &[RangeInclusive<u32>] = &[
    0x0300..=0x036F, // Combining diacritical marks
    0x1AB0..=0x1AFF, // Combining diacritical marks extended
    0x1DC0..=0x1DFF, // Combining diacritical marks supplement
    0x200D..=0x200D, // Zero width joiner
    0x20D0..=0x20FF, // Combining marks for symbols
    0xFE00..=0xFE0F, // Variation selectors
    0xFE20..=0xFE2F, // Combining half marks
];

/// Counts characters as a reader sees them, folding attached code points
/// into the character before them.  A leading attached code point still
/// counts once.
fn visible_char_count(text: &str) -> usize {
    let mut count = 0;
    let mut has_base = false;
    for c in text.chars() {
        let code = u32::from(c);
        if has_base && ATTACHED_RANGES.iter().any(|range| range.contains(&code)) {
            continue;
        }
        has_base = true;
        count += 1;
    }
    count
}

fn has_surrounding_whitespace(text: &str) -> bool {
    let first = text.chars().next().is_some_and(char::is_whitespace);
    let last = text.chars().next_back().is_some_and(char::is_whitespace);
    first || last
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Individual rules ──────────────────────────────────────────────────────

    #[test]
    fn test_valid_name_passes_local_rules() {
        assert_eq!(validate_shop_name("asdf", MIN_SHOP_NAME_CHARS), Ok(()));
    }

    #[test]
    fn test_empty_name_is_rejected_as_empty() {
        assert_eq!(
            validate_shop_name("", MIN_SHOP_NAME_CHARS),
            Err(ShopError::Empty)
        );
    }

    #[test]
    fn test_trailing_space_is_rejected() {
        assert_eq!(
            validate_shop_name("shop ", MIN_SHOP_NAME_CHARS),
            Err(ShopError::LeadingOrTrailingWhitespace)
        );
    }

    #[test]
    fn test_leading_tab_is_rejected() {
        assert_eq!(
            validate_shop_name("\tshop", MIN_SHOP_NAME_CHARS),
            Err(ShopError::LeadingOrTrailingWhitespace)
        );
    }

    #[test]
    fn test_inner_space_is_allowed() {
        assert_eq!(validate_shop_name("my shop", MIN_SHOP_NAME_CHARS), Ok(()));
    }

    #[test]
    fn test_two_characters_are_too_short() {
        assert_eq!(
            validate_shop_name("as", MIN_SHOP_NAME_CHARS),
            Err(ShopError::TooShort)
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "éé" is four bytes but two characters.
        assert_eq!(
            validate_shop_name("éé", MIN_SHOP_NAME_CHARS),
            Err(ShopError::TooShort)
        );
        assert_eq!(validate_shop_name("ééé", MIN_SHOP_NAME_CHARS), Ok(()));
    }

    #[test]
    fn test_combining_marks_do_not_add_length() {
        // Two decomposed "é" are two visible characters.
        assert_eq!(
            validate_shop_name("e\u{301}e\u{301}", MIN_SHOP_NAME_CHARS),
            Err(ShopError::TooShort)
        );
        assert_eq!(
            validate_shop_name("e\u{301}e\u{301}e", MIN_SHOP_NAME_CHARS),
            Ok(())
        );
    }

    #[test]
    fn test_visible_count_folds_joiners_and_selectors() {
        assert_eq!(visible_char_count("a\u{200D}b"), 2);
        assert_eq!(visible_char_count("a\u{FE0F}"), 1);
        assert_eq!(visible_char_count("\u{301}a"), 2);
        assert_eq!(visible_char_count(""), 0);
    }

    #[test]
    fn test_minimum_is_configurable() {
        assert_eq!(validate_shop_name("abcd", 5), Err(ShopError::TooShort));
        assert_eq!(validate_shop_name("ab", 1), Ok(()));
    }

    // ── Precedence ────────────────────────────────────────────────────────────

    #[test]
    fn test_emoji_beats_length() {
        assert_eq!(
            validate_shop_name("😄", MIN_SHOP_NAME_CHARS),
            Err(ShopError::ContainsEmoji)
        );
    }

    #[test]
    fn test_emoji_beats_whitespace() {
        assert_eq!(
            validate_shop_name(" as😄d ", MIN_SHOP_NAME_CHARS),
            Err(ShopError::ContainsEmoji)
        );
    }

    #[test]
    fn test_whitespace_beats_length() {
        assert_eq!(
            validate_shop_name(" a", MIN_SHOP_NAME_CHARS),
            Err(ShopError::LeadingOrTrailingWhitespace)
        );
    }

    #[test]
    fn test_single_space_reports_whitespace_not_empty() {
        assert_eq!(
            validate_shop_name(" ", MIN_SHOP_NAME_CHARS),
            Err(ShopError::LeadingOrTrailingWhitespace)
        );
    }

    // ── Domain suggestion ─────────────────────────────────────────────────────

    #[test]
    fn test_suggestion_appends_city_id() {
        assert_eq!(suggest_domain_name("asdf", "4"), "asdf-4");
    }

    #[test]
    fn test_suggestion_keeps_raw_text() {
        assert_eq!(suggest_domain_name("shop ", "4"), "shop -4");
        assert_eq!(suggest_domain_name("", "4"), "-4");
    }
}
