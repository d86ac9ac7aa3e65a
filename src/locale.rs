//! Locale support for numeral rendering
//!
//! This module defines the locale-formatting capability the numeral tables are
//! derived from, and a built-in implementation backed by TOML locale data.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;

use crate::error::{NumeralsError, Result};

/// Renders numbers the way a locale writes them
///
/// Numeral tables only ever call this with integers 0-9 (no fraction digits)
/// and with `-0.9` (exactly one fraction digit).
pub trait LocaleFormatter {
    /// Whether the formatter has a locale-specific rendering for `locale`
    fn supports_extended_numerals(&self, locale: &str) -> bool;

    /// Render `value` with between `min_fraction_digits` and `max_fraction_digits` fraction digits
    fn format_number(
        &self,
        locale: &str,
        value: f64,
        min_fraction_digits: usize,
        max_fraction_digits: usize,
    ) -> String;
}

/// Numeral glyphs of one locale
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Glyphs for digits 0-9
    pub digits: [char; 10],
    pub minus_sign: char,
    pub decimal_separator: char,
    /// Bidi mark written before the minus sign, e.g. U+200F for Arabic
    pub sign_mark: Option<char>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
            minus_sign: '-',
            decimal_separator: '.',
            sign_mark: None,
        }
    }
}

impl LocaleSettings {
    /// Render `value` with these glyphs
    ///
    /// Trailing zero fraction digits are dropped down to `min_fraction_digits`
    /// and the separator disappears with the last fraction digit.
    pub fn format(&self, value: f64, min_fraction_digits: usize, max_fraction_digits: usize) -> String {
        let max_fraction_digits = max_fraction_digits.max(min_fraction_digits);
        let mut ascii = format!("{:.*}", max_fraction_digits, value.abs());

        if let Some(dot) = ascii.find('.') {
            let shortest = dot + 1 + min_fraction_digits;
            while ascii.len() > shortest && ascii.ends_with('0') {
                ascii.pop();
            }
            if ascii.ends_with('.') {
                ascii.pop();
            }
        }

        let mut result = String::with_capacity(ascii.len() + 2);
        if value < 0.0 {
            if let Some(mark) = self.sign_mark {
                result.push(mark);
            }
            result.push(self.minus_sign);
        }
        for c in ascii.chars() {
            match c {
                '0'..='9' => result.push(self.digits[usize::from(c as u8 - b'0')]),
                '.' => result.push(self.decimal_separator),
                other => result.push(other),
            }
        }
        result
    }
}

/// Normalize a locale tag so that `ar-EG` and `ar_EG` name the same locale
pub fn normalize_locale_tag(locale: &str) -> String {
    locale.replace('-', "_")
}

/// Locale formatter driven by a TOML locale data document
///
/// The document has a `[base]` table and one table per locale tag; locale
/// tables inherit every key they omit from `[base]`.
#[derive(Debug, Clone, Default)]
pub struct TomlLocaleFormatter {
    base: LocaleSettings,
    locales: HashMap<String, LocaleSettings>,
}

// Global singleton for the embedded locale data
static BUILTIN_FORMATTER: OnceLock<TomlLocaleFormatter> = OnceLock::new();

impl TomlLocaleFormatter {
    /// Load locale data from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| NumeralsError::LocaleData(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| NumeralsError::LocaleData("Root is not a table".to_string()))?;

        let base = match table.get("base") {
            Some(value) => apply_locale_table(LocaleSettings::default(), "base", value)?,
            None => LocaleSettings::default(),
        };

        let mut locales = HashMap::new();
        for (locale_id, value) in table {
            if locale_id == "base" {
                continue;
            }
            let settings = apply_locale_table(base.clone(), locale_id, value)?;
            locales.insert(normalize_locale_tag(locale_id), settings);
        }

        Ok(Self { base, locales })
    }

    /// The formatter for the locale data embedded in the crate
    pub fn builtin() -> &'static Self {
        BUILTIN_FORMATTER.get_or_init(|| {
            Self::from_toml_str(include_str!("locale/locales.toml")).unwrap_or_else(|e| {
                warn!(error = %e, "failed to load embedded locale data");
                Self::default()
            })
        })
    }

    /// Settings of a known locale
    pub fn locale_settings(&self, locale: &str) -> Option<&LocaleSettings> {
        self.locales.get(&normalize_locale_tag(locale))
    }

    /// Settings used for `locale`, falling back to `[base]` for unknown tags
    pub fn settings_or_base(&self, locale: &str) -> &LocaleSettings {
        self.locale_settings(locale).unwrap_or(&self.base)
    }

    /// All known locale tags, in normalized form
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }
}

impl LocaleFormatter for TomlLocaleFormatter {
    fn supports_extended_numerals(&self, locale: &str) -> bool {
        self.locale_settings(locale).is_some()
    }

    fn format_number(
        &self,
        locale: &str,
        value: f64,
        min_fraction_digits: usize,
        max_fraction_digits: usize,
    ) -> String {
        self.settings_or_base(locale)
            .format(value, min_fraction_digits, max_fraction_digits)
    }
}

fn single_char(locale_id: &str, key: &str, text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(NumeralsError::LocaleData(format!(
            "{locale_id}.{key} must be a single character, got '{text}'"
        ))),
    }
}

/// Apply one locale table from TOML over `settings`
fn apply_locale_table(
    mut settings: LocaleSettings,
    locale_id: &str,
    value: &toml::Value,
) -> Result<LocaleSettings> {
    let table = value.as_table().ok_or_else(|| {
        NumeralsError::LocaleData(format!("Locale setting {locale_id} is not a table"))
    })?;

    if let Some(digits) = table.get("digits") {
        let digits = digits.as_str().ok_or_else(|| {
            NumeralsError::LocaleData(format!("{locale_id}.digits is not a string"))
        })?;
        let glyphs: Vec<char> = digits.chars().collect();
        settings.digits = glyphs.try_into().map_err(|glyphs: Vec<char>| {
            NumeralsError::LocaleData(format!(
                "{locale_id}.digits must list 10 digits, got {}",
                glyphs.len()
            ))
        })?;
    }

    for key in ["minus", "decimal", "sign_mark"] {
        let Some(entry) = table.get(key) else {
            continue;
        };
        let text = entry.as_str().ok_or_else(|| {
            NumeralsError::LocaleData(format!("{locale_id}.{key} is not a string"))
        })?;
        let c = single_char(locale_id, key, text)?;
        match key {
            "minus" => settings.minus_sign = c,
            "decimal" => settings.decimal_separator = c,
            _ => settings.sign_mark = Some(c),
        }
    }

    Ok(settings)
}
