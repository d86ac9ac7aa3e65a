//! Value types shared by the parsers, the pattern builder and the value parser.

/// Digit-count bounds parsed from a spec such as `"1.2-2"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSpec {
    /// Minimum number of integer digits
    pub min_integer_digits: usize,
    /// Minimum number of fraction digits
    pub min_fraction_digits: usize,
    /// Maximum number of fraction digits
    pub max_fraction_digits: usize,
}

impl DigitSpec {
    pub const DEFAULT_MIN_INTEGER_DIGITS: usize = 1;
    pub const DEFAULT_MIN_FRACTION_DIGITS: usize = 0;
    pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

    pub fn new(
        min_integer_digits: usize,
        min_fraction_digits: usize,
        max_fraction_digits: usize,
    ) -> Self {
        Self {
            min_integer_digits,
            min_fraction_digits,
            max_fraction_digits,
        }
    }
}

impl Default for DigitSpec {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MIN_INTEGER_DIGITS,
            Self::DEFAULT_MIN_FRACTION_DIGITS,
            Self::DEFAULT_MAX_FRACTION_DIGITS,
        )
    }
}

/// Canonical meaning of a locale character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Digit 0-9
    Digit(u8),
    /// Minus sign
    Minus,
    /// Decimal separator
    Decimal,
}

impl Glyph {
    /// ASCII rendering of the glyph
    pub fn to_ascii(self) -> char {
        match self {
            Glyph::Digit(d) => char::from(b'0' + d),
            Glyph::Minus => '-',
            Glyph::Decimal => '.',
        }
    }
}

/// Outcome of converting locale-formatted text into a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocaleNumber {
    /// Nothing to parse: empty text or no locale
    Empty,
    /// The text is not a number in this locale
    NotANumber,
    /// Parsed value
    Value(f64),
}

impl LocaleNumber {
    /// The parsed value, if any
    pub fn value(self) -> Option<f64> {
        match self {
            LocaleNumber::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the text was not a number in the locale
    pub fn is_nan(self) -> bool {
        matches!(self, LocaleNumber::NotANumber)
    }

    /// Whether there was nothing to parse
    pub fn is_empty(self) -> bool {
        matches!(self, LocaleNumber::Empty)
    }
}

/// `None` for empty input, `NaN` for unparsable input
impl From<LocaleNumber> for Option<f64> {
    fn from(number: LocaleNumber) -> Self {
        match number {
            LocaleNumber::Empty => None,
            LocaleNumber::NotANumber => Some(f64::NAN),
            LocaleNumber::Value(v) => Some(v),
        }
    }
}
