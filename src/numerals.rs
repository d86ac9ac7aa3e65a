//! Numeral tables: the characters a locale uses for digits, minus sign and decimal separator.
//!
//! Tables are derived from a [`LocaleFormatter`] by formatting the digits 0-9
//! and the reference value `-0.9`, then kept immutable for their lifetime.

use tracing::debug;

use crate::error::{NumeralsError, Result};
use crate::locale::{LocaleFormatter, TomlLocaleFormatter};
use crate::types::Glyph;

/// Right-to-left mark some formatters put in front of the minus sign
pub const RIGHT_TO_LEFT_MARK: char = '\u{200F}';

/// Reference value whose rendering reveals the minus sign and decimal separator
const SIGN_SAMPLE: f64 = -0.9;

const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// A locale's numeral characters
pub trait NumeralSystem {
    /// Locale tag the table was built for
    fn locale(&self) -> &str;

    /// The ten digit glyphs, index `i` renders digit `i`
    fn digits(&self) -> &[char; 10];

    fn minus_sign(&self) -> char;

    fn decimal_separator(&self) -> char;

    /// Glyph rendering digit `digit`
    ///
    /// # Panics
    /// Panics if `digit` is greater than 9.
    fn digit(&self, digit: usize) -> char {
        self.digits()[digit]
    }

    /// Canonical meaning of `c`, or `None` when it is not part of this numeral system
    fn classify(&self, c: char) -> Option<Glyph> {
        if let Some(d) = self.digits().iter().position(|&g| g == c) {
            return Some(Glyph::Digit(d as u8));
        }
        if c == self.minus_sign() {
            Some(Glyph::Minus)
        } else if c == self.decimal_separator() {
            Some(Glyph::Decimal)
        } else {
            None
        }
    }
}

/// Decimal numeral table of a locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalNumerals {
    locale: String,
    digits: [char; 10],
    minus_sign: char,
    decimal_separator: char,
}

impl DecimalNumerals {
    /// ASCII digits, `-` and `.`
    pub fn ascii(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            digits: ASCII_DIGITS,
            minus_sign: '-',
            decimal_separator: '.',
        }
    }

    /// Derive the numeral table of `locale` from `formatter`
    ///
    /// Fails when the formatter renders a digit as more than one character, or
    /// when the resulting glyphs are not pairwise distinct.
    pub fn for_locale(locale: &str, formatter: &impl LocaleFormatter) -> Result<Self> {
        let digits = build_digit_table(locale, formatter)?;
        let (minus_sign, decimal_separator) = resolve_signs(locale, formatter)?;

        let numerals = Self {
            locale: locale.to_string(),
            digits,
            minus_sign,
            decimal_separator,
        };
        numerals.check_distinct()?;

        debug!(
            locale,
            digits = %numerals.digits.iter().collect::<String>(),
            minus = %numerals.minus_sign.escape_unicode(),
            decimal = %numerals.decimal_separator.escape_unicode(),
            "built numeral table"
        );
        Ok(numerals)
    }

    /// Numeral table of `locale` according to the embedded locale data
    pub fn builtin(locale: &str) -> Result<Self> {
        Self::for_locale(locale, TomlLocaleFormatter::builtin())
    }

    fn check_distinct(&self) -> Result<()> {
        let mut glyphs: Vec<char> = self.digits.to_vec();
        glyphs.push(self.minus_sign);
        glyphs.push(self.decimal_separator);
        glyphs.sort_unstable();

        if let Some(pair) = glyphs.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(NumeralsError::MalformedNumerals {
                locale: self.locale.clone(),
                reason: format!("glyph {} is used twice", pair[0].escape_unicode()),
            });
        }
        Ok(())
    }
}

impl NumeralSystem for DecimalNumerals {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn digits(&self) -> &[char; 10] {
        &self.digits
    }

    fn minus_sign(&self) -> char {
        self.minus_sign
    }

    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

/// The ten digit glyphs of `locale`
///
/// Starts from ASCII `0`-`9`; a locale with extended numeral support gets
/// each digit rendered by the formatter with no fraction digits.
pub fn build_digit_table(locale: &str, formatter: &impl LocaleFormatter) -> Result<[char; 10]> {
    let mut digits = ASCII_DIGITS;
    if !formatter.supports_extended_numerals(locale) {
        return Ok(digits);
    }

    for (i, slot) in digits.iter_mut().enumerate() {
        let rendered = formatter.format_number(locale, i as f64, 0, 0);
        let mut chars = rendered.chars();
        *slot = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(NumeralsError::MalformedNumerals {
                    locale: locale.to_string(),
                    reason: format!("digit {i} renders as '{rendered}'"),
                });
            }
        };
    }
    Ok(digits)
}

/// Minus sign and decimal separator of `locale`
///
/// Formats `-0.9` with one fraction digit. When the output starts with a
/// right-to-left mark the sign is read at index 1, otherwise at index 0; the
/// separator is always two characters after the sign.
pub fn resolve_signs(locale: &str, formatter: &impl LocaleFormatter) -> Result<(char, char)> {
    if !formatter.supports_extended_numerals(locale) {
        return Ok(('-', '.'));
    }

    let rendered = formatter.format_number(locale, SIGN_SAMPLE, 1, 1);
    let chars: Vec<char> = rendered.chars().collect();
    let sign_index = match chars.first() {
        Some(&RIGHT_TO_LEFT_MARK) => 1,
        _ => 0,
    };

    match (chars.get(sign_index), chars.get(sign_index + 2)) {
        (Some(&minus), Some(&decimal)) => Ok((minus, decimal)),
        _ => Err(NumeralsError::MalformedNumerals {
            locale: locale.to_string(),
            reason: format!("cannot read sign and separator from '{rendered}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleSettings;

    /// Formatter that renders every locale with fixed settings
    struct FixedFormatter {
        settings: LocaleSettings,
        extended: bool,
    }

    impl LocaleFormatter for FixedFormatter {
        fn supports_extended_numerals(&self, _locale: &str) -> bool {
            self.extended
        }

        fn format_number(&self, _locale: &str, value: f64, min: usize, max: usize) -> String {
            self.settings.format(value, min, max)
        }
    }

    /// Formatter returning canned text regardless of the value
    struct CannedFormatter(&'static str);

    impl LocaleFormatter for CannedFormatter {
        fn supports_extended_numerals(&self, _locale: &str) -> bool {
            true
        }

        fn format_number(&self, _locale: &str, _value: f64, _min: usize, _max: usize) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_ascii_table_without_extended_numerals() {
        let formatter = FixedFormatter {
            settings: LocaleSettings {
                digits: ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'],
                minus_sign: '~',
                decimal_separator: ',',
                sign_mark: None,
            },
            extended: false,
        };
        let numerals = DecimalNumerals::for_locale("any", &formatter).unwrap();
        assert_eq!(numerals, DecimalNumerals::ascii("any"));
    }

    #[test]
    fn test_arabic_table() {
        let numerals = DecimalNumerals::builtin("ar_EG").unwrap();
        assert_eq!(numerals.locale(), "ar_EG");
        assert_eq!(numerals.digit(0), '\u{0660}');
        assert_eq!(numerals.digit(5), '\u{0665}');
        // The sign sits behind the right-to-left mark
        assert_eq!(numerals.minus_sign(), '-');
        assert_eq!(numerals.decimal_separator(), '\u{066B}');
    }

    #[test]
    fn test_left_to_right_signs() {
        let numerals = DecimalNumerals::builtin("sv-SE").unwrap();
        assert_eq!(numerals.digits(), &ASCII_DIGITS);
        assert_eq!(numerals.minus_sign(), '\u{2212}');
        assert_eq!(numerals.decimal_separator(), ',');
    }

    #[test]
    fn test_unknown_locale_is_ascii() {
        let numerals = DecimalNumerals::builtin("xx_YY").unwrap();
        assert_eq!(numerals, DecimalNumerals::ascii("xx_YY"));
    }

    #[test]
    fn test_sign_offsets_follow_first_char() {
        let ltr = resolve_signs("t", &CannedFormatter("~0;9")).unwrap();
        assert_eq!(ltr, ('~', ';'));

        let rtl = resolve_signs("t", &CannedFormatter("\u{200F}~0;9")).unwrap();
        assert_eq!(rtl, ('~', ';'));

        // Other bidi marks are not skipped
        let lrm = resolve_signs("t", &CannedFormatter("\u{200E}~0;9")).unwrap();
        assert_eq!(lrm, ('\u{200E}', '0'));
    }

    #[test]
    fn test_short_sign_sample_fails() {
        let err = resolve_signs("t", &CannedFormatter("-0")).unwrap_err();
        assert!(matches!(err, NumeralsError::MalformedNumerals { .. }));
    }

    #[test]
    fn test_multi_char_digit_fails() {
        let err = build_digit_table("t", &CannedFormatter("10")).unwrap_err();
        assert!(matches!(err, NumeralsError::MalformedNumerals { ref reason, .. } if reason.contains("digit 0")));
    }

    #[test]
    fn test_colliding_glyphs_fail() {
        let formatter = FixedFormatter {
            settings: LocaleSettings {
                decimal_separator: '0',
                ..LocaleSettings::default()
            },
            extended: true,
        };
        let err = DecimalNumerals::for_locale("t", &formatter).unwrap_err();
        assert!(matches!(err, NumeralsError::MalformedNumerals { .. }));
    }

    #[test]
    fn test_classify() {
        let numerals = DecimalNumerals::builtin("fa_IR").unwrap();
        assert_eq!(numerals.classify('\u{06F7}'), Some(Glyph::Digit(7)));
        assert_eq!(numerals.classify('\u{2212}'), Some(Glyph::Minus));
        assert_eq!(numerals.classify('\u{066B}'), Some(Glyph::Decimal));
        assert_eq!(numerals.classify('7'), None);
        assert_eq!(numerals.classify('-'), None);
    }
}
