//! Integration tests for the shop-name rules through the public API.
//!
//! These cover the precedence guarantees the form relies on: an emoji
//! anywhere wins over whitespace and length problems, whatever the input.

use shop_core::{suggest_domain_name, validate_shop_name, ShopError, MIN_SHOP_NAME_CHARS};

const EMOJI_SAMPLES: &[&str] = &[
    "😄", "🚀", "🇮🇩", "☀", "✅", "🤖", "🫠", "⌚", "⏰", "🅰", "🆎", "🈁", "⌛",
];

#[test]
fn test_emoji_always_reported_regardless_of_length_or_whitespace() {
    let shapes: &[fn(&str) -> String] = &[
        |e| e.to_string(),
        |e| format!("a{e}"),
        |e| format!(" {e}"),
        |e| format!("{e} "),
        |e| format!("  shop{e}name  "),
        |e| format!("as{e}d"),
    ];

    for emoji in EMOJI_SAMPLES {
        for shape in shapes {
            let input = shape(emoji);
            assert_eq!(
                validate_shop_name(&input, MIN_SHOP_NAME_CHARS),
                Err(ShopError::ContainsEmoji),
                "input {input:?} must report ContainsEmoji"
            );
        }
    }
}

#[test]
fn test_known_scenarios_report_expected_errors() {
    let cases = [
        ("asdf", Ok(())),
        ("supergadgettt", Ok(())),
        ("as", Err(ShopError::TooShort)),
        ("shop ", Err(ShopError::LeadingOrTrailingWhitespace)),
        ("as😄d", Err(ShopError::ContainsEmoji)),
        ("", Err(ShopError::Empty)),
    ];

    for (input, expected) in cases {
        assert_eq!(
            validate_shop_name(input, MIN_SHOP_NAME_CHARS),
            expected,
            "input {input:?}"
        );
    }
}

#[test]
fn test_domain_suggestion_is_independent_of_validity() {
    for input in ["asdf", "as", "shop ", "as😄d", ""] {
        assert_eq!(suggest_domain_name(input, "4"), format!("{input}-4"));
    }
}
