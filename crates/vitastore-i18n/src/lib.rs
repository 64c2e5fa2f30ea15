//! Translations for Vitastore.
//!
//! The storefront is bilingual (Spanish by default, English on request).
//! UI code never holds user-facing text; it asks for a dotted key such as
//! `"nav.home"` and renders whatever comes back.
//!
//! - **Locales** ([`Locale`], [`LocaleInfo`]): the supported languages.
//! - **Catalog** ([`Catalog`]): one dictionary per locale, authored as
//!   nested JSON and flattened once into `"a.b.c" → text` maps.
//! - **Translator** ([`Translator`]): the active locale, persisted under
//!   [`LANGUAGE_KEY`](vitastore_storage::LANGUAGE_KEY), and the lookup.
//!
//! A key with no translation resolves to itself, so a forgotten string
//! shows up in the UI as `admin.contact.title` instead of a blank.

mod catalog;
mod error;
mod locale;
mod translator;

pub use catalog::Catalog;
pub use error::I18nError;
pub use locale::{Locale, LocaleInfo, FALLBACK_LOCALES};
pub use translator::Translator;
