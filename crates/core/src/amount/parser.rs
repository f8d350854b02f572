//! Currency text parser.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use super::error::AmountError;

/// Cell text meaning "zero" in accounting-formatted sheets.
pub const ZERO_SENTINEL: &str = "$ -";

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:,\d{3})*(?:\.\d+)?").expect("valid regex"));

/// Parser for currency-formatted text.
pub struct AmountParser;

impl AmountParser {
    /// Parses currency text such as `"$1,234.56"` into an exact decimal.
    ///
    /// The first numeric run in the text is used, with thousands separators
    /// removed. Text containing [`ZERO_SENTINEL`] and no number is zero.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Unparsable`] for any other text, including the
    /// empty string.
    pub fn parse(text: &str) -> Result<Decimal, AmountError> {
        if let Some(found) = AMOUNT_RE.find(text) {
            let digits = found.as_str().replace(',', "");
            return Decimal::from_str_exact(&digits)
                .map_err(|_| AmountError::Unparsable(text.to_string()));
        }

        if text.contains(ZERO_SENTINEL) {
            return Ok(Decimal::ZERO);
        }

        Err(AmountError::Unparsable(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("$1,234.56", dec!(1234.56))]
    #[case("$100.00", dec!(100.00))]
    #[case("$0.00", dec!(0.00))]
    #[case("$1,000,000.01", dec!(1000000.01))]
    #[case("$42", dec!(42))]
    #[case("1234.5", dec!(1234.5))]
    #[case(" $ 7,500.00 ", dec!(7500.00))]
    fn test_parse_valid(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(AmountParser::parse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("$ -")]
    #[case("$ -   ")]
    #[case("  $ - ")]
    fn test_parse_zero_sentinel(#[case] input: &str) {
        assert_eq!(AmountParser::parse(input).unwrap(), Decimal::ZERO);
    }

    #[rstest]
    #[case("not a dollar amount")]
    #[case("")]
    #[case("$")]
    #[case("-")]
    #[case("$-")]
    fn test_parse_rejects(#[case] input: &str) {
        assert_eq!(
            AmountParser::parse(input),
            Err(AmountError::Unparsable(input.to_string()))
        );
    }

    #[test]
    fn test_parse_keeps_scale() {
        let value = AmountParser::parse("$100.00").unwrap();
        assert_eq!(value.scale(), 2);
        assert_eq!(value.to_string(), "100.00");
    }

    #[test]
    fn test_error_display() {
        let err = AmountParser::parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "can't parse amount 'abc'");
    }
}
