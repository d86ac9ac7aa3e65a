//! Conversion of locale-formatted numeric text into numbers.

use tracing::{trace, warn};

use crate::locale::{LocaleFormatter, TomlLocaleFormatter};
use crate::numerals::{DecimalNumerals, NumeralSystem};
use crate::types::LocaleNumber;

/// Parse `text` written with the glyphs of `numerals`
///
/// Every character must be a digit, the minus sign or the decimal separator
/// of the numeral system; any other character rejects the whole input. The
/// translated ASCII text is then read as an `f64`.
pub fn parse_with_numerals(text: &str, numerals: &impl NumeralSystem) -> LocaleNumber {
    if text.is_empty() {
        return LocaleNumber::Empty;
    }

    let mut ascii = String::with_capacity(text.len());
    for (offset, c) in text.char_indices() {
        match numerals.classify(c) {
            Some(glyph) => ascii.push(glyph.to_ascii()),
            None => {
                trace!(
                    locale = numerals.locale(),
                    offset,
                    ch = %c.escape_unicode(),
                    "rejecting character outside the numeral system"
                );
                return LocaleNumber::NotANumber;
            }
        }
    }

    match ascii.parse::<f64>() {
        Ok(value) => LocaleNumber::Value(value),
        Err(_) => LocaleNumber::NotANumber,
    }
}

/// Parse `text` as a number of `locale`, with glyphs derived from `formatter`
pub fn parse_locale_number_with(
    text: &str,
    locale: &str,
    formatter: &impl LocaleFormatter,
) -> LocaleNumber {
    if text.is_empty() || locale.is_empty() {
        return LocaleNumber::Empty;
    }

    match DecimalNumerals::for_locale(locale, formatter) {
        Ok(numerals) => parse_with_numerals(text, &numerals),
        Err(e) => {
            warn!(locale, error = %e, "no numeral table, treating input as not a number");
            LocaleNumber::NotANumber
        }
    }
}

/// Parse `text` as a number of `locale` using the embedded locale data
///
/// # Examples
/// ```
/// use locale_numerals::{parse_locale_number, LocaleNumber};
///
/// assert_eq!(parse_locale_number("-12.5", "en_US"), LocaleNumber::Value(-12.5));
/// assert_eq!(parse_locale_number("\u{0661}\u{0662}", "ar_EG"), LocaleNumber::Value(12.0));
/// assert_eq!(parse_locale_number("", "en_US"), LocaleNumber::Empty);
/// assert!(parse_locale_number("12a3", "en_US").is_nan());
/// ```
pub fn parse_locale_number(text: &str, locale: &str) -> LocaleNumber {
    parse_locale_number_with(text, locale, TomlLocaleFormatter::builtin())
}
