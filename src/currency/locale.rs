use serde::{Deserialize, Serialize};

use crate::errors::FormatError;

/// Where the currency symbol (or code) sits relative to the digits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping_size: usize,
    pub symbol_position: SymbolPosition,
    /// Inserts a no-break space between the symbol and the digits.
    pub symbol_spacing: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::ko_kr()
    }
}

impl LocaleConfig {
    pub const KNOWN_TAGS: [&'static str; 5] = ["ko-KR", "en-US", "ja-JP", "de-DE", "fr-FR"];

    pub fn ko_kr() -> Self {
        Self {
            language_tag: "ko-KR".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            grouping_size: 3,
            symbol_position: SymbolPosition::Prefix,
            symbol_spacing: false,
        }
    }

    pub fn en_us() -> Self {
        Self {
            language_tag: "en-US".into(),
            ..Self::ko_kr()
        }
    }

    pub fn ja_jp() -> Self {
        Self {
            language_tag: "ja-JP".into(),
            ..Self::ko_kr()
        }
    }

    pub fn de_de() -> Self {
        Self {
            language_tag: "de-DE".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            grouping_size: 3,
            symbol_position: SymbolPosition::Suffix,
            symbol_spacing: true,
        }
    }

    pub fn fr_fr() -> Self {
        Self {
            language_tag: "fr-FR".into(),
            decimal_separator: ',',
            grouping_separator: '\u{202f}',
            grouping_size: 3,
            symbol_position: SymbolPosition::Suffix,
            symbol_spacing: true,
        }
    }

    /// Resolves a language tag such as `ko-KR` or `ko_kr` to its preset.
    pub fn for_tag(tag: &str) -> Result<Self, FormatError> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "ko-kr" | "ko" => Ok(Self::ko_kr()),
            "en-us" | "en" => Ok(Self::en_us()),
            "ja-jp" | "ja" => Ok(Self::ja_jp()),
            "de-de" | "de" => Ok(Self::de_de()),
            "fr-fr" | "fr" => Ok(Self::fr_fr()),
            _ => Err(FormatError::UnknownLocale(tag.to_string())),
        }
    }

    /// Groups an unsigned run of integer digits with this locale's separator.
    pub fn group_digits(&self, digits: &str) -> String {
        if self.grouping_size == 0 {
            return digits.to_string();
        }
        let count = digits.chars().count();
        let mut grouped = String::with_capacity(digits.len() + count / self.grouping_size * 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx != 0 && (count - idx) % self.grouping_size == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(ch);
        }
        grouped
    }

    /// Renders unsigned `.`-separated digits with this locale's grouping and
    /// decimal separator.
    pub fn localize_digits(&self, int_part: &str, frac_part: Option<&str>) -> String {
        let mut body = self.group_digits(int_part);
        if let Some(frac) = frac_part {
            body.push(self.decimal_separator);
            body.push_str(frac);
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_thousands() {
        let locale = LocaleConfig::ko_kr();
        assert_eq!(locale.group_digits("0"), "0");
        assert_eq!(locale.group_digits("999"), "999");
        assert_eq!(locale.group_digits("1000"), "1,000");
        assert_eq!(locale.group_digits("1234567"), "1,234,567");
    }

    #[test]
    fn localizes_decimal_separator() {
        let locale = LocaleConfig::de_de();
        assert_eq!(locale.localize_digits("1234", Some("50")), "1.234,50");
        assert_eq!(locale.localize_digits("12", None), "12");
    }

    #[test]
    fn resolves_tags_case_insensitively() {
        assert_eq!(LocaleConfig::for_tag("ko_kr").unwrap(), LocaleConfig::ko_kr());
        assert_eq!(LocaleConfig::for_tag(" EN-us ").unwrap(), LocaleConfig::en_us());
        assert!(matches!(
            LocaleConfig::for_tag("xx-YY"),
            Err(FormatError::UnknownLocale(tag)) if tag == "xx-YY"
        ));
    }

    #[test]
    fn every_known_tag_resolves() {
        for tag in LocaleConfig::KNOWN_TAGS {
            let locale = LocaleConfig::for_tag(tag).expect("known tag");
            assert_eq!(locale.language_tag, tag);
        }
    }
}
