//! Error types for numeral table construction and digit-spec parsing
//!
//! Value parsing never produces these: unparsable user input is reported
//! through [`crate::types::LocaleNumber`] instead.

use thiserror::Error;

/// Errors surfaced to callers that supplied a bad digit spec or locale data
#[derive(Debug, Error)]
pub enum NumeralsError {
    /// A numeric fragment is not a valid literal in its radix
    #[error("malformed integer literal '{text}' (radix {radix})")]
    MalformedInteger { text: String, radix: u32 },

    /// The digit-count specification does not have the `{minInt}.{minFraction}-{maxFraction}` shape
    #[error("'{spec}' is not a valid digit info")]
    InvalidDigitInfo { spec: String },

    /// The digit-count specification asks for zero integer digits
    #[error("digit info '{spec}' has minIntegerDigits 0, at least 1 is required")]
    IntegerDigits { spec: String },

    /// The digit-count specification asks for fewer maximum than minimum fraction digits
    #[error("digit info '{spec}' has maxFractionDigits {max} below minFractionDigits {min}")]
    FractionBounds { spec: String, min: usize, max: usize },

    /// The locale formatter produced glyphs that cannot form a numeral table
    #[error("malformed numerals for locale '{locale}': {reason}")]
    MalformedNumerals { locale: String, reason: String },

    /// Locale data could not be parsed
    #[error("error parsing locale data: {0}")]
    LocaleData(String),

    /// The assembled pattern did not compile
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, NumeralsError>;
