//! Locale-aware numeric text.
//!
//! Converts numbers written with a locale's digit glyphs, minus sign and
//! decimal separator into `f64` values, and builds validation patterns that
//! accept only numbers with a given count of integer and fraction digits.

pub mod error;
pub mod locale;
pub mod numerals;
pub mod parser;
pub mod pattern;
pub mod types;
pub mod value;

// Main API
pub use error::{NumeralsError, Result};
pub use locale::{LocaleFormatter, LocaleSettings, TomlLocaleFormatter};
pub use numerals::{DecimalNumerals, NumeralSystem};
pub use parser::parse_digit_spec;
pub use pattern::{NumberPattern, build_number_pattern, build_number_pattern_with};
pub use types::*;
pub use value::{parse_locale_number, parse_locale_number_with, parse_with_numerals};

#[cfg(test)]
mod tests;
