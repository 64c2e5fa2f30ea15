//! Unified error type for the Vitastore workspace.

use vitastore_i18n::I18nError;
use vitastore_session::AuthError;
use vitastore_storage::StorageError;

/// Top-level error that wraps every crate-specific error.
///
/// The `#[from]` attributes let `?` convert sub-crate errors
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum VitastoreError {
    /// Persistent storage couldn't be opened, read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A sign-in or sign-up was refused.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A locale code or dictionary was rejected.
    #[error(transparent)]
    I18n(#[from] I18nError),
}
