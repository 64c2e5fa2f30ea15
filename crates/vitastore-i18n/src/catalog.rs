//! Per-locale dictionaries, flattened for single-lookup access.
//!
//! Dictionaries are written as nested JSON because that's how translators
//! edit them:
//!
//! ```json
//! { "admin": { "contact": { "title": "Mensajes de contacto" } } }
//! ```
//!
//! At load time each one is flattened into `"admin.contact.title" → text`,
//! so resolving a key is one hash lookup instead of a walk down the tree.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde_json::Value;

use crate::{I18nError, Locale};

const BUILTIN_ES: &str = include_str!("../locales/es.json");
const BUILTIN_EN: &str = include_str!("../locales/en.json");

/// Read-only translations for every loaded locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dictionaries: BTreeMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// An empty catalog (no locales).
    pub fn new() -> Self {
        Self::default()
    }

    /// The storefront's own Spanish and English dictionaries.
    ///
    /// Both files are compiled in. One that fails to load is logged and
    /// left out; lookups in that locale then fall back to the raw key.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (locale, json) in [(Locale::Es, BUILTIN_ES), (Locale::En, BUILTIN_EN)] {
            if let Err(e) = catalog.insert_json(locale, json) {
                tracing::error!(error = %e, %locale, "built-in dictionary failed to load");
            }
        }
        catalog
    }

    /// Parses `json` and installs it as the dictionary for `locale`,
    /// replacing any previous one.
    ///
    /// # Errors
    /// - [`I18nError::InvalidDictionary`] if `json` doesn't parse.
    /// - [`I18nError::NotAnObject`] if its root isn't an object.
    pub fn insert_json(&mut self, locale: Locale, json: &str) -> Result<(), I18nError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|source| I18nError::InvalidDictionary { locale, source })?;
        self.insert_dictionary(locale, &value)
    }

    /// Flattens a nested dictionary and installs it for `locale`.
    ///
    /// String leaves are kept as-is; number and boolean leaves are kept in
    /// their JSON text form. `null` and arrays aren't translations and are
    /// skipped. So is any entry whose own name contains a `.`: lookups
    /// split keys on dots, so `{"x.y": ..}` could never be reached as one
    /// segment and would shadow a real `{"x": {"y": ..}}`.
    ///
    /// # Errors
    /// [`I18nError::NotAnObject`] if `dictionary` isn't an object.
    pub fn insert_dictionary(&mut self, locale: Locale, dictionary: &Value) -> Result<(), I18nError> {
        let Value::Object(root) = dictionary else {
            return Err(I18nError::NotAnObject(locale));
        };

        let mut flat = HashMap::new();
        for (segment, value) in root {
            if is_plain_segment(segment, segment) {
                flatten(segment.clone(), value, &mut flat);
            }
        }

        tracing::debug!(%locale, keys = flat.len(), "dictionary loaded");
        self.dictionaries.insert(locale, flat);
        Ok(())
    }

    /// The translation of `key` in `locale`, if there is one.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.dictionaries
            .get(&locale)?
            .get(key)
            .map(String::as_str)
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.get(locale, key).is_some()
    }

    /// Locales that have a dictionary, in menu order.
    pub fn locales(&self) -> Vec<Locale> {
        self.dictionaries.keys().copied().collect()
    }

    /// Number of keys in `locale`'s dictionary (0 if not loaded).
    pub fn key_count(&self, locale: Locale) -> usize {
        self.dictionaries.get(&locale).map_or(0, HashMap::len)
    }

    /// Keys some locale defines but another doesn't.
    ///
    /// Every dictionary is supposed to define the same keys. The result
    /// maps each lagging locale to its missing keys (sorted); locales that
    /// are complete are left out, so an empty map means no drift.
    pub fn missing_keys(&self) -> BTreeMap<Locale, Vec<String>> {
        let all: BTreeSet<&String> = self.dictionaries.values().flat_map(HashMap::keys).collect();

        self.dictionaries
            .iter()
            .filter_map(|(locale, dict)| {
                let missing: Vec<String> = all
                    .iter()
                    .filter(|key| !dict.contains_key(key.as_str()))
                    .map(|key| key.to_string())
                    .collect();
                (!missing.is_empty()).then_some((*locale, missing))
            })
            .collect()
    }
}

/// Depth-first flatten of `value` under the dotted `path`.
fn flatten(path: String, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::String(text) => {
            out.insert(path, text.clone());
        }
        Value::Number(n) => {
            out.insert(path, n.to_string());
        }
        Value::Bool(b) => {
            out.insert(path, b.to_string());
        }
        Value::Object(children) => {
            for (segment, child) in children {
                let child_path = format!("{path}.{segment}");
                if is_plain_segment(segment, &child_path) {
                    flatten(child_path, child, out);
                }
            }
        }
        Value::Null | Value::Array(_) => {
            tracing::debug!(key = %path, "skipping non-text dictionary entry");
        }
    }
}

/// `false` (with a warning) if `segment` contains a `.`.
fn is_plain_segment(segment: &str, path: &str) -> bool {
    if segment.contains('.') {
        tracing::warn!(key = %path, "skipping dictionary entry with a dot in its name");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // =====================================================================
    // builtin()
    // =====================================================================

    #[test]
    fn test_builtin_has_both_locales() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.locales(), vec![Locale::Es, Locale::En]);
    }

    #[test]
    fn test_builtin_files_parse_as_objects() {
        for (locale, json) in [(Locale::Es, BUILTIN_ES), (Locale::En, BUILTIN_EN)] {
            let mut catalog = Catalog::new();
            assert!(catalog.insert_json(locale, json).is_ok(), "{locale} dictionary");
            assert!(catalog.key_count(locale) > 0);
        }
    }

    #[test]
    fn test_builtin_locales_define_same_keys() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.missing_keys(), BTreeMap::new());
        assert_eq!(catalog.key_count(Locale::Es), catalog.key_count(Locale::En));
    }

    #[test]
    fn test_builtin_nav_home() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(Locale::Es, "nav.home"), Some("Inicio"));
        assert_eq!(catalog.get(Locale::En, "nav.home"), Some("Home"));
    }

    #[test]
    fn test_builtin_covers_auth_notification_keys() {
        let catalog = Catalog::builtin();
        for key in [
            "auth.login.success",
            "auth.login.invalid",
            "auth.register.success",
            "auth.register.duplicate_email",
            "auth.logout",
            "auth.busy",
            "auth.cancelled",
        ] {
            for locale in Locale::ALL {
                assert!(catalog.contains(locale, key), "{locale} is missing {key}");
            }
        }
    }

    // =====================================================================
    // insert_*()
    // =====================================================================

    #[test]
    fn test_insert_dictionary_flattens_nested_objects() {
        let mut catalog = Catalog::new();
        catalog
            .insert_dictionary(
                Locale::En,
                &json!({ "admin": { "contact": { "title": "Contact" } }, "top": "Top" }),
            )
            .unwrap();

        assert_eq!(catalog.get(Locale::En, "admin.contact.title"), Some("Contact"));
        assert_eq!(catalog.get(Locale::En, "top"), Some("Top"));
        assert_eq!(catalog.key_count(Locale::En), 2);
    }

    #[test]
    fn test_insert_dictionary_interior_nodes_are_not_keys() {
        let mut catalog = Catalog::new();
        catalog
            .insert_dictionary(Locale::En, &json!({ "nav": { "home": "Home" } }))
            .unwrap();

        assert!(!catalog.contains(Locale::En, "nav"));
    }

    #[test]
    fn test_insert_dictionary_scalar_leaves() {
        let mut catalog = Catalog::new();
        catalog
            .insert_dictionary(
                Locale::En,
                &json!({ "limits": { "max": 5, "enabled": true, "none": null, "list": ["a"] } }),
            )
            .unwrap();

        assert_eq!(catalog.get(Locale::En, "limits.max"), Some("5"));
        assert_eq!(catalog.get(Locale::En, "limits.enabled"), Some("true"));
        assert!(!catalog.contains(Locale::En, "limits.none"));
        assert!(!catalog.contains(Locale::En, "limits.list"));
    }

    #[test]
    fn test_insert_dictionary_dotted_names_skipped() {
        let mut catalog = Catalog::new();
        catalog
            .insert_json(
                Locale::Es,
                r#"{"a":{"b":"nested"},"a.b":"flat","x.y":"literal","g":{"h.i":"deep"}}"#,
            )
            .unwrap();

        assert_eq!(catalog.get(Locale::Es, "a.b"), Some("nested"));
        assert!(!catalog.contains(Locale::Es, "x.y"));
        assert!(!catalog.contains(Locale::Es, "g.h.i"));
        assert_eq!(catalog.key_count(Locale::Es), 1);
    }

    #[test]
    fn test_insert_dictionary_dotted_name_does_not_shadow_nested_whatever_the_order() {
        let mut catalog = Catalog::new();
        catalog
            .insert_json(Locale::En, r#"{"a.b":"flat","a":{"b":"nested"}}"#)
            .unwrap();

        assert_eq!(catalog.get(Locale::En, "a.b"), Some("nested"));
    }

    #[test]
    fn test_insert_dictionary_non_object_rejected() {
        let mut catalog = Catalog::new();
        let result = catalog.insert_dictionary(Locale::Es, &json!(["not", "a", "map"]));
        assert!(matches!(result, Err(I18nError::NotAnObject(Locale::Es))));
    }

    #[test]
    fn test_insert_json_invalid_rejected() {
        let mut catalog = Catalog::new();
        let result = catalog.insert_json(Locale::Es, "{ nope");
        assert!(matches!(
            result,
            Err(I18nError::InvalidDictionary { locale: Locale::Es, .. })
        ));
    }

    // =====================================================================
    // missing_keys()
    // =====================================================================

    #[test]
    fn test_missing_keys_reports_each_lagging_locale() {
        let mut catalog = Catalog::new();
        catalog
            .insert_dictionary(Locale::Es, &json!({ "a": "A", "b": "B" }))
            .unwrap();
        catalog
            .insert_dictionary(Locale::En, &json!({ "a": "A", "c": "C" }))
            .unwrap();

        let missing = catalog.missing_keys();

        assert_eq!(missing[&Locale::Es], vec!["c".to_string()]);
        assert_eq!(missing[&Locale::En], vec!["b".to_string()]);
    }
}
