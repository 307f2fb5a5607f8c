pub mod locale;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    errors::FormatError,
    utils::decimal::{shortest_fixed_digits, split_digits},
};

pub use locale::{LocaleConfig, SymbolPosition};

const NO_BREAK_SPACE: &str = "\u{a0}";

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    /// Accepts three ASCII letters in any case, e.g. `krw` or ` USD `.
    pub fn parse(code: &str) -> Result<Self, FormatError> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FormatError::InvalidCurrency(code.to_string()));
        }
        Ok(Self::new(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("KRW")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FormatOptions {
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    #[serde(default)]
    pub negative_style: NegativeStyle,
}

impl FormatOptions {
    pub fn is_default(value: &FormatOptions) -> bool {
        value == &Self::default()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
    SymbolAndCode,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "KRW" => "₩".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "CNY" => "CN¥".into(),
        "AUD" => "A$".into(),
        "CAD" => "CA$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "KRW" | "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders amounts in one currency under one locale.
///
/// The default formatter produces Korean Won amounts: `₩1,234,567`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrencyFormatter {
    code: CurrencyCode,
    locale: LocaleConfig,
    options: FormatOptions,
}

impl CurrencyFormatter {
    pub fn new(code: CurrencyCode, locale: LocaleConfig, options: FormatOptions) -> Self {
        Self {
            code,
            locale,
            options,
        }
    }

    pub fn code(&self) -> &CurrencyCode {
        &self.code
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Number of fraction digits rendered for this currency.
    pub fn precision(&self) -> u8 {
        minor_units_for(self.code.as_str())
    }

    /// Formats `value`, rounding half away from zero to the currency's minor
    /// units. Rounding applies to the shortest decimal that round-trips to
    /// `value`, so `1.005` dollars render as `$1.01` and `1e30` keeps its
    /// trailing zeros.
    ///
    /// Never fails: `NaN` renders as `₩NaN` and infinities as `₩∞` / `-₩∞`.
    /// A set sign bit is always shown, so `-0.0` and `-0.4` render as `-₩0`.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            tracing::debug!(currency = %self.code, "formatting NaN currency amount");
            return self.decorate("NaN", false);
        }
        if value.is_infinite() {
            tracing::debug!(currency = %self.code, value, "formatting infinite currency amount");
            return self.decorate("∞", value.is_sign_negative());
        }
        let digits = shortest_fixed_digits(value, u32::from(self.precision()));
        let (int_part, frac_part) = split_digits(&digits);
        let body = self.locale.localize_digits(int_part, frac_part);
        self.decorate(&body, value.is_sign_negative())
    }

    /// Like [`CurrencyFormatter::format`], but rejects `NaN` and infinities.
    pub fn try_format(&self, value: f64) -> Result<String, FormatError> {
        if !value.is_finite() {
            return Err(FormatError::NonFinite(value));
        }
        Ok(self.format(value))
    }

    fn decorate(&self, body: &str, negative: bool) -> String {
        let code = self.code.as_str();
        let symbol = symbol_for(code);
        // Codes standing in for a missing symbol are always spaced.
        let spaced = self.locale.symbol_spacing || symbol == code;
        let expression = match self.options.currency_display {
            CurrencyDisplay::Symbol => self.attach(&symbol, body, spaced),
            CurrencyDisplay::Code => self.attach(code, body, true),
            CurrencyDisplay::SymbolAndCode => {
                format!("{} ({})", self.attach(&symbol, body, spaced), code)
            }
        };
        if !negative {
            return expression;
        }
        match self.options.negative_style {
            NegativeStyle::Sign => format!("-{}", expression),
            NegativeStyle::Parentheses => format!("({})", expression),
        }
    }

    fn attach(&self, label: &str, body: &str, spaced: bool) -> String {
        let gap = if spaced { NO_BREAK_SPACE } else { "" };
        match self.locale.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{}", label, gap, body),
            SymbolPosition::Suffix => format!("{}{}{}", body, gap, label),
        }
    }
}
