//! Validation patterns for locale-formatted numbers.
//!
//! A [`NumberPattern`] accepts exactly the numeric strings a [`DigitSpec`]
//! permits, written with a locale's own digit, minus and separator glyphs.

use std::fmt;

use regex::Regex;

use crate::error::Result;
use crate::locale::{LocaleFormatter, TomlLocaleFormatter};
use crate::numerals::{DecimalNumerals, NumeralSystem};
use crate::parser::parse_digit_spec;
use crate::types::DigitSpec;

/// Compiled matcher for numbers of one digit spec in one locale
#[derive(Debug, Clone)]
pub struct NumberPattern {
    regex: Regex,
    spec: DigitSpec,
}

impl NumberPattern {
    /// Build the matcher for `spec` over the glyphs of `numerals`
    ///
    /// The digit class is the range from the glyph for 0 to the glyph for 9,
    /// so the locale's digits must be contiguous code points.
    pub fn new(numerals: &impl NumeralSystem, spec: DigitSpec) -> Result<Self> {
        let digit = format!(
            "[{}-{}]",
            escape(numerals.digit(0)),
            escape(numerals.digit(9))
        );
        let minus = escape(numerals.minus_sign());
        let decimal = escape(numerals.decimal_separator());

        let DigitSpec {
            min_integer_digits: min_int,
            min_fraction_digits: min_fraction,
            max_fraction_digits: max_fraction,
        } = spec;

        let source = if min_fraction > 0 && max_fraction > 0 {
            format!(
                "^{minus}?{digit}{{{min_int},}}{decimal}{digit}{{{min_fraction},{max_fraction}}}$"
            )
        } else if min_fraction == 0 && max_fraction > 0 {
            format!(
                "^{minus}?{digit}{{{min_int},}}(?:{decimal}{digit}{{{min_fraction},{max_fraction}}})?$"
            )
        } else {
            format!("^{minus}?{digit}{{{min_int},}}$")
        };

        Ok(Self {
            regex: Regex::new(&source)?,
            spec,
        })
    }

    /// Whether `text` is a number this pattern permits
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Source of the compiled expression
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn spec(&self) -> &DigitSpec {
        &self.spec
    }
}

impl fmt::Display for NumberPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn escape(c: char) -> String {
    regex::escape(c.encode_utf8(&mut [0; 4]))
}

/// Build a number pattern for `locale` from a digit spec such as `"1.2-2"`
///
/// Uses the embedded locale data. An absent or empty spec means `"1.0-3"`.
///
/// # Examples
/// ```
/// use locale_numerals::build_number_pattern;
///
/// let pattern = build_number_pattern("en_US", Some("1.2-2")).unwrap();
/// assert!(pattern.is_match("-12.34"));
/// assert!(!pattern.is_match("12.3"));
/// ```
pub fn build_number_pattern(locale: &str, digit_spec: Option<&str>) -> Result<NumberPattern> {
    build_number_pattern_with(locale, digit_spec, TomlLocaleFormatter::builtin())
}

/// Build a number pattern for `locale` with glyphs derived from `formatter`
pub fn build_number_pattern_with(
    locale: &str,
    digit_spec: Option<&str>,
    formatter: &impl LocaleFormatter,
) -> Result<NumberPattern> {
    let spec = parse_digit_spec(digit_spec)?;
    let numerals = DecimalNumerals::for_locale(locale, formatter)?;
    NumberPattern::new(&numerals, spec)
}
