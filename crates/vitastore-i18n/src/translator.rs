//! The translator: active locale plus key lookup.

use std::sync::{Arc, PoisonError, RwLock};

use vitastore_storage::{KeyValueStore, LANGUAGE_KEY};

use crate::{Catalog, Locale, LocaleInfo, FALLBACK_LOCALES};

/// Resolves translation keys in the visitor's chosen language.
///
/// Build one at startup and share it. The active locale is read from the
/// store once, in [`new`](Self::new), and written back on every
/// [`set_locale`](Self::set_locale).
pub struct Translator {
    catalog: Arc<Catalog>,
    locale: RwLock<Locale>,
    store: Arc<dyn KeyValueStore>,
}

impl Translator {
    /// Creates a translator, restoring the persisted locale.
    ///
    /// Nothing persisted, an unknown code, or an unreadable store all mean
    /// the default locale (Spanish).
    pub fn new(catalog: impl Into<Arc<Catalog>>, store: Arc<dyn KeyValueStore>) -> Self {
        let locale = match store.get(LANGUAGE_KEY) {
            Ok(Some(code)) => Locale::parse(&code).unwrap_or_else(|| {
                tracing::warn!(code = %code, "persisted locale unsupported, using default");
                Locale::default()
            }),
            Ok(None) => Locale::default(),
            Err(e) => {
                tracing::warn!(error = %e, "persisted locale unavailable, using default");
                Locale::default()
            }
        };

        tracing::debug!(%locale, "translator ready");

        Self {
            catalog: catalog.into(),
            locale: RwLock::new(locale),
            store,
        }
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        *self.locale.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switches the active locale and persists the choice. Later calls to
    /// [`resolve`](Self::resolve) use it immediately.
    pub fn set_locale(&self, locale: Locale) {
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = locale;

        if let Err(e) = self.store.set(LANGUAGE_KEY, locale.code()) {
            tracing::warn!(error = %e, %locale, "failed to persist locale");
        }
        tracing::info!(%locale, "locale changed");
    }

    /// Looks up `key` (e.g. `"nav.home"`) in the active locale.
    ///
    /// - `""` resolves to `""`.
    /// - A key with no text in the active locale (unknown path, or a path
    ///   that stops at a group like `"nav"`) logs a warning and resolves
    ///   to the key itself.
    pub fn resolve(&self, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }

        let locale = self.locale();
        match self.catalog.get(locale, key) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(key, %locale, "translation key not found");
                key.to_string()
            }
        }
    }

    /// `true` if `key` has text in the active locale.
    pub fn has_key(&self, key: &str) -> bool {
        self.catalog.contains(self.locale(), key)
    }

    /// The language picker entries. Never empty: a catalog without
    /// dictionaries yields [`FALLBACK_LOCALES`].
    pub fn available_locales(&self) -> Vec<LocaleInfo> {
        let locales = self.catalog.locales();
        if locales.is_empty() {
            return FALLBACK_LOCALES.to_vec();
        }
        locales.into_iter().map(Locale::info).collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use vitastore_storage::MemoryStore;

    use super::*;

    fn translator(store: &MemoryStore) -> Translator {
        Translator::new(Catalog::builtin(), Arc::new(store.clone()))
    }

    // =====================================================================
    // new()
    // =====================================================================

    #[test]
    fn test_new_without_persisted_locale_defaults_to_spanish() {
        let t = translator(&MemoryStore::new());
        assert_eq!(t.locale(), Locale::Es);
    }

    #[test]
    fn test_new_restores_persisted_locale() {
        let store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "en").unwrap();

        assert_eq!(translator(&store).locale(), Locale::En);
    }

    #[test]
    fn test_new_unknown_persisted_locale_defaults_to_spanish() {
        let store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "klingon").unwrap();

        assert_eq!(translator(&store).locale(), Locale::Es);
    }

    // =====================================================================
    // resolve()
    // =====================================================================

    #[test]
    fn test_resolve_empty_key_is_empty() {
        assert_eq!(translator(&MemoryStore::new()).resolve(""), "");
    }

    #[test]
    fn test_resolve_unknown_key_returns_key() {
        let t = translator(&MemoryStore::new());
        assert_eq!(t.resolve("nonexistent.path"), "nonexistent.path");
    }

    #[test]
    fn test_resolve_group_key_returns_key() {
        // "nav" exists, but only as a group of strings.
        let t = translator(&MemoryStore::new());
        assert_eq!(t.resolve("nav"), "nav");
    }

    #[test]
    fn test_resolve_past_a_leaf_returns_key() {
        let t = translator(&MemoryStore::new());
        assert_eq!(t.resolve("nav.home.extra"), "nav.home.extra");
    }

    #[test]
    fn test_resolve_nav_home_per_locale() {
        let t = translator(&MemoryStore::new());
        assert_eq!(t.resolve("nav.home"), "Inicio");

        t.set_locale(Locale::En);
        assert_eq!(t.resolve("nav.home"), "Home");
    }

    #[test]
    fn test_resolve_dotted_dictionary_name_returns_key() {
        let mut catalog = Catalog::new();
        catalog
            .insert_json(Locale::Es, r#"{"a":{"b":"nested"},"a.b":"flat","x.y":"literal"}"#)
            .unwrap();
        let t = Translator::new(catalog, Arc::new(MemoryStore::new()));

        assert_eq!(t.resolve("a.b"), "nested");
        assert_eq!(t.resolve("x.y"), "x.y");
    }

    #[test]
    fn test_resolve_deep_key() {
        let t = translator(&MemoryStore::new());
        assert_eq!(t.resolve("admin.contact.title"), "Mensajes de contacto");
    }

    // =====================================================================
    // set_locale()
    // =====================================================================

    #[test]
    fn test_set_locale_persists_code() {
        let store = MemoryStore::new();
        let t = translator(&store);

        t.set_locale(Locale::En);

        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_set_locale_survives_restart() {
        let store = MemoryStore::new();
        translator(&store).set_locale(Locale::En);

        let restarted = translator(&store);

        assert_eq!(restarted.locale(), Locale::En);
        assert_eq!(restarted.resolve("cart.title"), "Your cart");
    }

    // =====================================================================
    // available_locales() / has_key()
    // =====================================================================

    #[test]
    fn test_available_locales_from_catalog() {
        let t = translator(&MemoryStore::new());
        let codes: Vec<&str> = t.available_locales().iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["es", "en"]);
    }

    #[test]
    fn test_available_locales_empty_catalog_uses_fallback() {
        let t = Translator::new(Catalog::new(), Arc::new(MemoryStore::new()));
        assert_eq!(t.available_locales(), FALLBACK_LOCALES.to_vec());
    }

    #[test]
    fn test_available_locales_partial_catalog_lists_only_loaded() {
        let mut catalog = Catalog::new();
        catalog.insert_json(Locale::En, r#"{"nav":{"home":"Home"}}"#).unwrap();
        let t = Translator::new(catalog, Arc::new(MemoryStore::new()));

        assert_eq!(t.available_locales(), vec![Locale::En.info()]);
    }

    #[test]
    fn test_has_key_follows_active_locale() {
        let mut catalog = Catalog::new();
        catalog.insert_json(Locale::En, r#"{"only":{"en":"x"}}"#).unwrap();
        let t = Translator::new(catalog, Arc::new(MemoryStore::new()));

        assert!(!t.has_key("only.en"));
        t.set_locale(Locale::En);
        assert!(t.has_key("only.en"));
    }
}
