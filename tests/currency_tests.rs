use won_format::{
    currency::{CurrencyDisplay, FormatOptions, NegativeStyle},
    to_currency, CurrencyCode, CurrencyFormatter, LocaleConfig,
};

#[test]
fn zero_renders_symbol_and_digit() {
    let formatted = to_currency(0);
    assert!(formatted.contains('₩'));
    assert!(formatted.contains('0'));
    assert_eq!(formatted, "₩0");
}

#[test]
fn groups_thousands_with_commas() {
    assert_eq!(to_currency(1234567), "₩1,234,567");
    assert_eq!(to_currency(1000), "₩1,000");
    assert_eq!(to_currency(999), "₩999");
    assert_eq!(to_currency(1_000_000_000_000.0), "₩1,000,000,000,000");
}

#[test]
fn negative_amounts_keep_their_sign() {
    assert_eq!(to_currency(-500), "-₩500");
    assert_eq!(to_currency(-1234567.8), "-₩1,234,568");
}

#[test]
fn fractional_won_rounds_to_whole_units() {
    assert_eq!(to_currency(0.5), "₩1");
    assert_eq!(to_currency(1234.4), "₩1,234");
    assert_eq!(to_currency(2.5), "₩3");
    assert_eq!(to_currency(-2.5), "-₩3");
}

#[test]
fn repeated_calls_are_identical() {
    for value in [0.0, 1234567.0, -500.0, 0.5, f64::NAN] {
        let first = to_currency(value);
        for _ in 0..5 {
            assert_eq!(to_currency(value), first);
        }
    }
}

#[test]
fn formats_other_currencies_with_locale() {
    let options = FormatOptions {
        currency_display: CurrencyDisplay::Symbol,
        negative_style: NegativeStyle::Parentheses,
    };
    let formatter =
        CurrencyFormatter::new(CurrencyCode::new("EUR"), LocaleConfig::fr_fr(), options);
    assert_eq!(formatter.format(-1234.5), "(1\u{202f}234,50\u{a0}€)");

    let dollars = CurrencyFormatter::new(
        CurrencyCode::new("USD"),
        LocaleConfig::en_us(),
        FormatOptions::default(),
    );
    assert_eq!(dollars.format(1234.005), "$1,234.01");
}

#[test]
fn symbol_and_code_display_appends_code() {
    let formatter = CurrencyFormatter::new(
        CurrencyCode::default(),
        LocaleConfig::default(),
        FormatOptions {
            currency_display: CurrencyDisplay::SymbolAndCode,
            negative_style: NegativeStyle::Sign,
        },
    );
    assert_eq!(formatter.format(-50000.0), "-₩50,000 (KRW)");
}

#[test]
fn three_digit_minor_units_are_respected() {
    let formatter = CurrencyFormatter::new(
        CurrencyCode::new("KWD"),
        LocaleConfig::en_us(),
        FormatOptions::default(),
    );
    assert_eq!(formatter.format(1.5), "KWD\u{a0}1.500");
}

#[test]
fn rounding_uses_the_written_decimal_not_the_binary_expansion() {
    let dollars = CurrencyFormatter::new(
        CurrencyCode::new("USD"),
        LocaleConfig::en_us(),
        FormatOptions::default(),
    );
    assert_eq!(dollars.format(1.005), "$1.01");
    assert_eq!(dollars.format(-1.005), "-$1.01");
}

#[test]
fn huge_amounts_keep_their_trailing_zeros() {
    assert_eq!(
        to_currency(1e30),
        "₩1,000,000,000,000,000,000,000,000,000,000"
    );
}
