use crate::*;

#[test]
fn test_pattern_and_value_share_glyphs() {
    let numerals = DecimalNumerals::builtin("ar_SA").unwrap();
    let pattern = NumberPattern::new(&numerals, DigitSpec::new(1, 2, 2)).unwrap();

    let text = "-\u{0664}\u{0662}\u{066B}\u{0665}\u{0660}";
    assert!(pattern.is_match(text));
    assert_eq!(parse_with_numerals(text, &numerals), LocaleNumber::Value(-42.5));
}

#[test]
fn test_formatted_negative_keeps_bidi_mark() {
    // The formatter writes U+200F before the sign; neither the pattern nor
    // the value parser accepts it.
    let formatter = TomlLocaleFormatter::builtin();
    let text = formatter.format_number("ar_EG", -1.5, 1, 1);
    assert!(text.starts_with('\u{200F}'));

    let pattern = build_number_pattern("ar_EG", Some("1.1-1")).unwrap();
    assert!(!pattern.is_match(&text));
    assert!(pattern.is_match(text.trim_start_matches('\u{200F}')));

    assert!(parse_locale_number(&text, "ar_EG").is_nan());
    assert_eq!(
        parse_locale_number(text.trim_start_matches('\u{200F}'), "ar_EG"),
        LocaleNumber::Value(-1.5)
    );
}

#[test]
fn test_tables_are_deterministic() {
    for locale in ["en_US", "ar_EG", "bn_BD", "sv_SE", "zz"] {
        let first = DecimalNumerals::builtin(locale).unwrap();
        let second = DecimalNumerals::builtin(locale).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_spec_examples() {
    let two = build_number_pattern("en_US", Some("1.2-2")).unwrap();
    assert!(two.is_match("-12.34"));
    assert!(two.is_match("12.34"));
    assert!(!two.is_match("12.3"));
    assert!(!two.is_match("12.345"));

    let optional = build_number_pattern("en_US", Some("1.0-3")).unwrap();
    assert!(optional.is_match("12"));
    assert!(optional.is_match("12.345"));

    let integer = build_number_pattern("en_US", Some("1.0-0")).unwrap();
    assert!(integer.is_match("12"));
    assert!(integer.is_match("-12"));
    assert!(!integer.is_match("12.3"));

    assert_eq!(parse_locale_number("123", "en_US"), LocaleNumber::Value(123.0));
    assert_eq!(parse_locale_number("", "en_US"), LocaleNumber::Empty);
    assert!(parse_locale_number("12a3", "en_US").is_nan());

    assert!(parse_digit_spec(Some("abc")).is_err());
    assert_eq!(parse_digit_spec(None).unwrap(), DigitSpec::new(1, 0, 3));
}
