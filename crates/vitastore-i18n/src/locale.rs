//! Supported locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::I18nError;

/// A storefront language.
///
/// Serialized as its lowercase code (`"es"`, `"en"`), which is also what
/// gets persisted under the language key. Spanish is the default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Every supported locale, in menu order.
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// The short code (`"es"`, `"en"`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// The language's name in that language.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "English",
        }
    }

    /// Parses a locale code, ignoring case and any region tag
    /// (`"EN"`, `"en-US"`, `"es_MX"`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        let lang = value.split(['-', '_']).next().unwrap_or_default();
        match lang {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn info(self) -> LocaleInfo {
        LocaleInfo {
            code: self.code(),
            name: self.display_name(),
        }
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| I18nError::UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A row of the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
    pub code: &'static str,
    pub name: &'static str,
}

/// Shown when a catalog carries no dictionaries at all, so the language
/// picker is never empty.
pub const FALLBACK_LOCALES: [LocaleInfo; 2] = [
    LocaleInfo {
        code: "es",
        name: "Español",
    },
    LocaleInfo {
        code: "en",
        name: "English",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(Locale::default(), Locale::Es);
    }

    #[test]
    fn test_parse_accepts_case_and_region_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse(" es_MX "), Some(Locale::Es));
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_from_str_unknown_returns_error() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(matches!(err, I18nError::UnknownLocale(code) if code == "de"));
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        let back: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(back, Locale::Es);
    }

    #[test]
    fn test_fallback_list_matches_supported_locales() {
        let from_enum: Vec<LocaleInfo> = Locale::ALL.iter().map(|l| l.info()).collect();
        assert_eq!(from_enum, FALLBACK_LOCALES.to_vec());
    }
}
