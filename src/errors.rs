use thiserror::Error;

/// Error type returned by the strict formatting and configuration paths.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Cannot format non-finite value: {0}")]
    NonFinite(f64),
    #[error("Invalid precision: {0} (maximum is {max})", max = crate::percentage::MAX_PRECISION)]
    InvalidPrecision(u8),
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
