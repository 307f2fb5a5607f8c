//! Fraction to percentage rendering: `0.1234` becomes `"12.34%"`.

use crate::{errors::FormatError, utils::decimal::fixed_digits};

/// Default number of decimals after the point.
pub const DEFAULT_PRECISION: u8 = 2;
/// Largest accepted precision.
pub const MAX_PRECISION: u8 = 20;

/// Scales fractions by 100 and renders them with a fixed number of decimals.
///
/// The product is rounded half away from zero on its exact binary value, so
/// `1.005` (whose product is `100.49999999999999`) renders as `100.50%`.
/// Unlike `toFixed`, products of `1e21` and above are written with all of
/// their integer digits rather than in exponent form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageFormatter {
    precision: u8,
}

impl Default for PercentageFormatter {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl PercentageFormatter {
    pub fn new(precision: u8) -> Result<Self, FormatError> {
        if precision > MAX_PRECISION {
            return Err(FormatError::InvalidPrecision(precision));
        }
        Ok(Self { precision })
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Formats `fraction` as a percentage. Never fails.
    ///
    /// `NaN` renders as `NaN%` and infinities as `Infinity%` / `-Infinity%`.
    /// The minus sign appears only when the scaled value is below zero, so
    /// `-0.0` renders as `0.00%` while `-0.00001` renders as `-0.00%`.
    pub fn format(&self, fraction: f64) -> String {
        let scaled = fraction * 100.0;
        if scaled.is_nan() {
            tracing::debug!("formatting NaN percentage");
            return "NaN%".to_string();
        }
        if scaled.is_infinite() {
            tracing::debug!(fraction, "formatting infinite percentage");
            let sign = if scaled < 0.0 { "-" } else { "" };
            return format!("{}Infinity%", sign);
        }
        let sign = if scaled < 0.0 { "-" } else { "" };
        format!(
            "{}{}%",
            sign,
            fixed_digits(scaled, u32::from(self.precision))
        )
    }

    /// Like [`PercentageFormatter::format`], but rejects fractions that are
    /// not finite or whose scaled value overflows.
    pub fn try_format(&self, fraction: f64) -> Result<String, FormatError> {
        if !fraction.is_finite() {
            return Err(FormatError::NonFinite(fraction));
        }
        let scaled = fraction * 100.0;
        if !scaled.is_finite() {
            return Err(FormatError::NonFinite(scaled));
        }
        Ok(self.format(fraction))
    }
}
