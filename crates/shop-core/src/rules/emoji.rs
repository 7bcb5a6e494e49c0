//! Emoji detection by Unicode scalar value.
//!
//! A string "contains an emoji" when any of its scalars falls inside one of
//! the code point blocks listed in [`EMOJI_RANGES`].  Grapheme clusters are
//! not segmented: a flag made of two regional indicators, or a skin-tone
//! sequence, is detected through its individual scalars.

use std::ops::RangeInclusive;

/// Code point blocks treated as emoji.
pub const EMOJI_RANGES: &[RangeInclusive<u32>] = &[
    0x1F600..=0x1F64F, // Emoticons
    0x1F300..=0x1F5FF, // Misc Symbols and Pictographs
    0x1F680..=0x1F6FF, // Transport and Map
    0x1F1E6..=0x1F1FF, // Regional indicator symbols (flags)
    0x1F900..=0x1F9FF, // Supplemental Symbols and Pictographs
    0x1FA70..=0x1FAFF, // Symbols and Pictographs Extended-A
    0x1F000..=0x1F02F, // Mahjong tiles
    0x1F0A0..=0x1F0FF, // Playing cards
    0x2600..=0x26FF,   // Misc symbols
    0x2700..=0x27BF,   // Dingbats
    0xFE00..=0xFE0F,   // Variation selectors
    0x1F170..=0x1F19A, // Enclosed alphanumerics (🅰 🆎)
    0x1F201..=0x1F251, // Enclosed ideographic supplement (🈁)
    0x231A..=0x231B,   // Watch, hourglass
    0x23E9..=0x23EC,   // Fast-forward and rewind buttons
    0x23F0..=0x23F0,   // Alarm clock
    0x23F3..=0x23F3,   // Hourglass with flowing sand
    0x25FD..=0x25FE,   // Medium-small squares
    0x2B1B..=0x2B1C,   // Large squares
    0x2B50..=0x2B50,   // White medium star
    0x2B55..=0x2B55,   // Heavy large circle
];

/// Returns `true` if `c` lies in any of the [`EMOJI_RANGES`].
pub fn is_emoji(c: char) -> bool {
    let scalar = u32::from(c);
    EMOJI_RANGES.iter().any(|range| range.contains(&scalar))
}

/// Returns `true` if any scalar of `text` is an emoji.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_has_no_emoji() {
        assert!(!contains_emoji("tulus jaya shop 42"));
    }

    #[test]
    fn test_smiley_is_detected_anywhere_in_text() {
        assert!(contains_emoji("😄"));
        assert!(contains_emoji("as😄d"));
        assert!(contains_emoji("shop😄"));
    }

    #[test]
    fn test_symbols_and_dingbats_are_detected() {
        assert!(contains_emoji("sun☀"));
        assert!(contains_emoji("check✅"));
        assert!(contains_emoji("⭐"));
    }

    #[test]
    fn test_default_presentation_symbols_are_detected() {
        for text in ["shop⌚", "alarm⏰", "blood🅰", "ab🆎", "here🈁", "wait⌛x", "⏩", "◾"] {
            assert!(contains_emoji(text), "{text:?} must contain an emoji");
        }
    }

    #[test]
    fn test_flag_is_detected_through_regional_indicators() {
        assert!(contains_emoji("🇮🇩"));
    }

    #[test]
    fn test_non_latin_letters_are_not_emoji() {
        assert!(!contains_emoji("東京"));
        assert!(!contains_emoji("Ñandú"));
    }
}
