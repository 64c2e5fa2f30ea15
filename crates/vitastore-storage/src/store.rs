//! The key-value store abstraction and the keys the storefront uses.

use crate::StorageError;

/// Key holding the JSON-encoded current user, absent when signed out.
pub const SESSION_KEY: &str = "user";

/// Key holding the active locale code (`"es"`, `"en"`), absent until the
/// visitor picks a language.
pub const LANGUAGE_KEY: &str = "language";

/// A flat, string-to-string persistent store.
///
/// Modeled after browser local storage: one writer, no transactions, and
/// values that survive a restart. Implementations must be `Send + Sync`
/// because the same store is shared by the session manager and the
/// translator behind an `Arc<dyn KeyValueStore>`.
///
/// # Example
///
/// ```rust
/// use vitastore_storage::{KeyValueStore, MemoryStore, LANGUAGE_KEY};
///
/// let store = MemoryStore::new();
/// store.set(LANGUAGE_KEY, "en").unwrap();
/// assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
///
/// store.remove(LANGUAGE_KEY).unwrap();
/// assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
/// ```
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
