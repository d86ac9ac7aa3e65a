use winnow::ascii::{digit1, hex_digit1, multispace0};
use winnow::combinator::{opt, preceded};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::error::{NumeralsError, Result};

fn sign(input: &mut &str) -> ModalResult<Option<char>> {
    opt(one_of(['+', '-'])).parse_next(input)
}

/// `[+-]?[0-9]+`
fn decimal_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (sign, digit1).take().parse_next(input)
}

/// `[+-]?[0-9A-Fa-f]+`
fn hex_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (sign, hex_digit1).take().parse_next(input)
}

/// Leading whitespace, optional sign, then the longest run of digits valid in `radix`.
/// Trailing text is left unconsumed.
fn radix_prefix<'s>(radix: u32) -> impl FnMut(&mut &'s str) -> ModalResult<&'s str> {
    move |input: &mut &'s str| -> ModalResult<&'s str> {
        preceded(
            multispace0,
            (sign, take_while(1.., move |c: char| c.is_digit(radix))).take(),
        )
        .parse_next(input)
    }
}

fn malformed(text: &str, radix: u32) -> NumeralsError {
    NumeralsError::MalformedInteger {
        text: text.to_string(),
        radix,
    }
}

/// Parse an integer literal, rejecting anything that is not a literal of `radix`
///
/// Radix 10 accepts only `[+-]?[0-9]+` and radix 16 only `[+-]?[0-9A-Fa-f]+`.
/// Any other radix in `2..=36` reads the leading literal and ignores what
/// follows it, failing only when no digit is found.
///
/// # Examples
/// ```
/// use locale_numerals::parser::parse_strict;
///
/// assert_eq!(parse_strict("-42", 10).unwrap(), -42);
/// assert_eq!(parse_strict("ff", 16).unwrap(), 255);
/// assert!(parse_strict("4x2", 10).is_err());
/// ```
pub fn parse_strict(text: &str, radix: u32) -> Result<i64> {
    let literal = match radix {
        10 => decimal_literal.parse(text).ok(),
        16 => hex_literal.parse(text).ok(),
        2..=36 => {
            let mut input = text;
            radix_prefix(radix).parse_next(&mut input).ok()
        }
        _ => None,
    };

    literal
        .and_then(|lit| i64::from_str_radix(lit, radix).ok())
        .ok_or_else(|| malformed(text, radix))
}

/// Parse a base-10 integer literal
pub fn parse_int_auto_radix(text: &str) -> Result<i64> {
    parse_strict(text, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_literals() {
        assert_eq!(parse_strict("0", 10).unwrap(), 0);
        assert_eq!(parse_strict("+17", 10).unwrap(), 17);
        assert_eq!(parse_strict("-0042", 10).unwrap(), -42);

        for bad in ["", "-", "+", "1.5", " 1", "1 ", "0x10", "1e3", "--1", "١٢"] {
            assert!(parse_strict(bad, 10).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_hex_literals() {
        assert_eq!(parse_strict("ff", 16).unwrap(), 255);
        assert_eq!(parse_strict("-A0", 16).unwrap(), -160);
        assert!(parse_strict("0xff", 16).is_err());
        assert!(parse_strict("fg", 16).is_err());
    }

    #[test]
    fn test_other_radixes_read_the_leading_literal() {
        assert_eq!(parse_strict("101", 2).unwrap(), 5);
        assert_eq!(parse_strict("  -17 apples", 8).unwrap(), -15);
        assert_eq!(parse_strict("z1", 36).unwrap(), 35 * 36 + 1);
        assert!(parse_strict("9", 8).is_err());
        assert!(parse_strict("abc", 2).is_err());
    }

    #[test]
    fn test_unsupported_radix() {
        assert!(parse_strict("1", 0).is_err());
        assert!(parse_strict("1", 1).is_err());
        assert!(parse_strict("1", 37).is_err());
    }

    #[test]
    fn test_overflow_is_malformed() {
        assert!(parse_strict("99999999999999999999", 10).is_err());
    }

    #[test]
    fn test_error_names_text_and_radix() {
        let err = parse_int_auto_radix("12a").unwrap_err();
        assert_eq!(err.to_string(), "malformed integer literal '12a' (radix 10)");
    }
}
