//! Property-based tests for currency text parsing.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::parser::{AmountParser, ZERO_SENTINEL};

/// Formats whole units with `,` every three digits.
fn with_thousands(units: u64) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Formatted dollars with cents parse back to the exact value.
    #[test]
    fn prop_formatted_dollars_parse_exactly(cents in 0i64..100_000_000_000_000i64) {
        let units = u64::try_from(cents / 100).unwrap();
        let text = format!("${}.{:02}", with_thousands(units), cents % 100);

        prop_assert_eq!(AmountParser::parse(&text).unwrap(), Decimal::new(cents, 2));
    }

    /// Whole-dollar text without cents is exact as well.
    #[test]
    fn prop_whole_dollars_parse_exactly(units in 0u64..1_000_000_000_000u64) {
        let text = format!("${}", with_thousands(units));

        prop_assert_eq!(AmountParser::parse(&text).unwrap(), Decimal::from(units));
    }

    /// The sentinel is zero wherever it appears, as long as no digit does.
    #[test]
    fn prop_sentinel_anywhere_is_zero(prefix in "[a-zA-Z ]{0,8}", suffix in "[a-zA-Z ]{0,8}") {
        let text = format!("{prefix}{ZERO_SENTINEL}{suffix}");

        prop_assert_eq!(AmountParser::parse(&text).unwrap(), Decimal::ZERO);
    }

    /// Digit-free text without the sentinel is always rejected.
    #[test]
    fn prop_text_without_digits_rejected(text in "[a-zA-Z ]{0,24}") {
        prop_assert!(AmountParser::parse(&text).is_err());
    }
}
