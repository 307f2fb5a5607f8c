#![doc(test(attr(deny(warnings))))]

//! Won Format renders amounts as Korean Won and fractions as percentages.
//!
//! ```
//! assert_eq!(won_format::to_currency(1234567), "₩1,234,567");
//! assert_eq!(won_format::to_percentage(0.1234), "12.34%");
//! ```

pub mod config;
pub mod currency;
pub mod errors;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod percentage;
pub mod utils;

use std::sync::Once;

use once_cell::sync::Lazy;

pub use config::{FormatConfig, Formatters};
pub use currency::{CurrencyCode, CurrencyFormatter, LocaleConfig};
pub use errors::FormatError;
pub use percentage::PercentageFormatter;

static INIT_TRACING: Once = Once::new();

pub(crate) static DEFAULT_CURRENCY: Lazy<CurrencyFormatter> =
    Lazy::new(CurrencyFormatter::default);
pub(crate) static DEFAULT_PERCENTAGE: Lazy<PercentageFormatter> =
    Lazy::new(PercentageFormatter::default);

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Won Format tracing initialized.");
    });
}

/// Formats `value` as a Korean Won amount, e.g. `₩1,234,567`.
pub fn to_currency(value: impl Into<f64>) -> String {
    DEFAULT_CURRENCY.format(value.into())
}

/// Formats a fraction as a percentage with two decimals, e.g. `12.34%`.
pub fn to_percentage(value: impl Into<f64>) -> String {
    DEFAULT_PERCENTAGE.format(value.into())
}
