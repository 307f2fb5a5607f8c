use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    currency::{CurrencyCode, CurrencyFormatter, FormatOptions, LocaleConfig},
    errors::FormatError,
    percentage::{PercentageFormatter, DEFAULT_PRECISION},
};

const TMP_SUFFIX: &str = "tmp";

/// Persisted formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatConfig {
    pub locale: String,
    pub currency: String,
    #[serde(default = "FormatConfig::default_percent_precision")]
    pub percent_precision: u8,
    #[serde(default, skip_serializing_if = "FormatOptions::is_default")]
    pub options: FormatOptions,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: "ko-KR".into(),
            currency: "KRW".into(),
            percent_precision: Self::default_percent_precision(),
            options: FormatOptions::default(),
        }
    }
}

/// Currency and percentage formatters built from one [`FormatConfig`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Formatters {
    pub currency: CurrencyFormatter,
    pub percentage: PercentageFormatter,
}

impl FormatConfig {
    pub fn default_percent_precision() -> u8 {
        DEFAULT_PRECISION
    }

    pub fn from_json_str(data: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Reads a configuration file, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self, FormatError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no format config found, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        tracing::info!(
            path = %path.display(),
            locale = %config.locale,
            currency = %config.currency,
            "loaded format config"
        );
        Ok(config)
    }

    /// Writes the configuration atomically by staging to a temporary file.
    pub fn save(&self, path: &Path) -> Result<(), FormatError> {
        let json = serde_json::to_string_pretty(self)?;
        let tmp = tmp_path(path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, path)?;
        tracing::debug!(path = %path.display(), "saved format config");
        Ok(())
    }

    /// Validates the configuration and builds the formatters it describes.
    pub fn build(&self) -> Result<Formatters, FormatError> {
        let locale = LocaleConfig::for_tag(&self.locale)?;
        let code = CurrencyCode::parse(&self.currency)?;
        let percentage = PercentageFormatter::new(self.percent_precision)?;
        let currency = CurrencyFormatter::new(code, locale, self.options.clone());
        Ok(Formatters {
            currency,
            percentage,
        })
    }
}

impl Formatters {
    pub fn currency(&self, value: f64) -> String {
        self.currency.format(value)
    }

    pub fn percentage(&self, fraction: f64) -> String {
        self.percentage.format(fraction)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), FormatError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
