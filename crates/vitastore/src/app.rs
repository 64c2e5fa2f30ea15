//! `AppBuilder` and the assembled storefront core.
//!
//! Ties the layers together: one store shared by the session manager and
//! the translator, so the signed-in user and the chosen language live in
//! the same place.

use std::sync::Arc;

use vitastore_i18n::{Catalog, Translator};
use vitastore_session::{
    AuthConfig, AuthManager, LogNotifier, Notification, Notifier, UserRegistry,
};
use vitastore_storage::{FileStore, KeyValueStore, MemoryStore};

use crate::{AppConfig, VitastoreError};

/// Builder for the storefront core.
///
/// Every part has a default: an in-memory store, the demo user registry,
/// an 800 ms simulated backend, notifications written to the log and the
/// built-in dictionaries.
///
/// # Example
///
/// ```rust,ignore
/// use vitastore::prelude::*;
///
/// let app = AppBuilder::new()
///     .store(FileStore::open("storage.json")?)
///     .build()
///     .await;
/// ```
pub struct AppBuilder {
    store: Option<Arc<dyn KeyValueStore>>,
    registry: UserRegistry,
    auth_config: AuthConfig,
    notifier: Arc<dyn Notifier>,
    catalog: Catalog,
}

impl AppBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            store: None,
            registry: UserRegistry::demo(),
            auth_config: AuthConfig::default(),
            notifier: Arc::new(LogNotifier),
            catalog: Catalog::builtin(),
        }
    }

    /// A builder set up from `config`.
    ///
    /// # Errors
    /// [`VitastoreError::Storage`] if `config.data_path` exists but can't
    /// be read or doesn't hold a store.
    pub fn from_config(config: &AppConfig) -> Result<Self, VitastoreError> {
        let mut builder = Self::new().auth_config(AuthConfig {
            latency: config.auth_latency,
        });
        if let Some(path) = &config.data_path {
            builder = builder.store(FileStore::open(path)?);
        }
        Ok(builder)
    }

    /// Persists session and language choice in `store`.
    pub fn store(self, store: impl KeyValueStore) -> Self {
        self.shared_store(Arc::new(store))
    }

    /// Like [`store`](Self::store), for a store the caller also keeps.
    pub fn shared_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the accounts that can sign in.
    pub fn registry(mut self, registry: UserRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the session configuration.
    pub fn auth_config(mut self, config: AuthConfig) -> Self {
        self.auth_config = config;
        self
    }

    /// Sets where login, registration and logout outcomes are reported.
    pub fn notifier(mut self, notifier: impl Notifier) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Sets the translation dictionaries.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Assembles the core and restores any persisted session and locale.
    pub async fn build(self) -> App {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));

        let auth = AuthManager::new(
            self.registry,
            Arc::clone(&store),
            self.notifier,
            self.auth_config,
        );
        auth.initialize().await;

        let i18n = Translator::new(self.catalog, store);

        tracing::info!(
            state = %auth.state(),
            locale = %i18n.locale(),
            "storefront core ready"
        );

        App {
            auth: Arc::new(auth),
            i18n: Arc::new(i18n),
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The storefront's shared services, built by [`AppBuilder`].
///
/// Both services are behind `Arc` so UI tasks can hold their own handle.
pub struct App {
    auth: Arc<AuthManager>,
    i18n: Arc<Translator>,
}

impl App {
    /// Creates a new builder.
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn auth(&self) -> &Arc<AuthManager> {
        &self.auth
    }

    pub fn i18n(&self) -> &Arc<Translator> {
        &self.i18n
    }

    /// The text of `notification` in the active locale.
    pub fn render(&self, notification: &Notification) -> String {
        self.i18n.resolve(&notification.key)
    }
}
