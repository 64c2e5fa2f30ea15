//! Error types for the translation layer.
//!
//! Lookups never fail: a missing key falls back to the key itself. These
//! errors only come from parsing locale codes and loading dictionaries.

use crate::Locale;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// The string isn't one of the supported locale codes.
    #[error("unsupported locale: {0:?}")]
    UnknownLocale(String),

    /// A dictionary wasn't valid JSON.
    #[error("dictionary for {locale} is not valid JSON: {source}")]
    InvalidDictionary {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    /// A dictionary parsed, but its root isn't an object.
    #[error("dictionary for {0} must be a JSON object")]
    NotAnObject(Locale),
}
