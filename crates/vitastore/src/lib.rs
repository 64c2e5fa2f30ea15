//! # Vitastore
//!
//! Session and translation core of the Vitastore supplements and
//! training storefront.
//!
//! The storefront's pages and back-office screens are thin views over two
//! shared services:
//!
//! - [`AuthManager`](vitastore_session::AuthManager): who is signed in,
//!   and whether they may open the back-office
//! - [`Translator`](vitastore_i18n::Translator): every user-facing string,
//!   in Spanish or English
//!
//! [`App`] builds both over one persistent store.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vitastore::prelude::*;
//!
//! # async fn run() -> Result<(), VitastoreError> {
//! let app = AppBuilder::from_config(&AppConfig::from_env())?.build().await;
//!
//! if app.auth().login("usuario@ejemplo.com", "123456").await {
//!     println!("{}", app.i18n().resolve("nav.home"));
//! }
//! # Ok(())
//! # }
//! ```

mod app;
mod config;
mod error;

pub use app::{App, AppBuilder};
pub use config::AppConfig;
pub use error::VitastoreError;

pub use vitastore_i18n as i18n;
pub use vitastore_session as session;
pub use vitastore_storage as storage;

/// Installs a `tracing` subscriber filtered by `RUST_LOG` (default
/// `info`). Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub mod prelude {
    //! Everyday types, for `use vitastore::prelude::*`.

    pub use crate::{init_tracing, App, AppBuilder, AppConfig, VitastoreError};
    pub use vitastore_i18n::{Catalog, Locale, LocaleInfo, Translator};
    pub use vitastore_session::{
        AuthConfig, AuthError, AuthManager, AuthState, ChannelNotifier, LogNotifier, NewUser,
        Notification, NotificationLevel, Notifier, User, UserRegistry,
    };
    pub use vitastore_storage::{FileStore, KeyValueStore, MemoryStore};
}
