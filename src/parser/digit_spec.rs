use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded};
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::error::{NumeralsError, Result};
use crate::parser::integer::parse_int_auto_radix;
use crate::types::DigitSpec;

/// Raw fields of `{minInt}.{minFraction}-{maxFraction}`, each optional
struct DigitSpecFields<'s> {
    min_integer: Option<&'s str>,
    min_fraction: Option<&'s str>,
    max_fraction: Option<&'s str>,
}

/// `(\d+)?\.((\d+)(-(\d+))?)?`
fn digit_spec_fields<'s>(input: &mut &'s str) -> ModalResult<DigitSpecFields<'s>> {
    (
        opt(digit1),
        preceded(
            literal("."),
            opt((digit1, opt(preceded(literal("-"), digit1)))),
        ),
    )
        .map(|(min_integer, fraction)| {
            let (min_fraction, max_fraction) = match fraction {
                Some((min, max)) => (Some(min), max),
                None => (None, None),
            };
            DigitSpecFields {
                min_integer,
                min_fraction,
                max_fraction,
            }
        })
        .parse_next(input)
}

fn field(text: Option<&str>, default: usize) -> Result<usize> {
    let Some(text) = text else {
        return Ok(default);
    };
    let value = parse_int_auto_radix(text)?;
    usize::try_from(value).map_err(|_| NumeralsError::MalformedInteger {
        text: text.to_string(),
        radix: 10,
    })
}

/// Parse a digit-count specification such as `"1.2-2"`
///
/// Missing fields take the defaults of [`DigitSpec`]; an absent or empty spec
/// yields the default spec. The whole string must match
/// `{minInt}.{minFraction}-{maxFraction}`, `minInt` must be at least 1 and
/// `maxFraction` may not be smaller than `minFraction`.
///
/// # Examples
/// ```
/// use locale_numerals::parser::parse_digit_spec;
/// use locale_numerals::DigitSpec;
///
/// assert_eq!(parse_digit_spec(Some("1.2-2")).unwrap(), DigitSpec::new(1, 2, 2));
/// assert_eq!(parse_digit_spec(None).unwrap(), DigitSpec::default());
/// ```
pub fn parse_digit_spec(spec: Option<&str>) -> Result<DigitSpec> {
    let spec = match spec {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(DigitSpec::default()),
    };

    let fields = digit_spec_fields
        .parse(spec)
        .map_err(|_| NumeralsError::InvalidDigitInfo {
            spec: spec.to_string(),
        })?;

    let digit_spec = DigitSpec::new(
        field(fields.min_integer, DigitSpec::DEFAULT_MIN_INTEGER_DIGITS)?,
        field(fields.min_fraction, DigitSpec::DEFAULT_MIN_FRACTION_DIGITS)?,
        field(fields.max_fraction, DigitSpec::DEFAULT_MAX_FRACTION_DIGITS)?,
    );

    if digit_spec.min_integer_digits == 0 {
        return Err(NumeralsError::IntegerDigits {
            spec: spec.to_string(),
        });
    }

    if digit_spec.max_fraction_digits < digit_spec.min_fraction_digits {
        return Err(NumeralsError::FractionBounds {
            spec: spec.to_string(),
            min: digit_spec.min_fraction_digits,
            max: digit_spec.max_fraction_digits,
        });
    }

    Ok(digit_spec)
}
