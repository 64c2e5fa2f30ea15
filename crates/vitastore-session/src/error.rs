//! Error types for the session layer.

/// Errors that can occur while signing a customer in or up.
///
/// None of these are fatal. [`AuthManager::login`](crate::AuthManager::login)
/// and [`AuthManager::register`](crate::AuthManager::register) turn them
/// into an error notification and a `false` return; the `try_*` variants
/// hand them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No registered user matches the identifier, or the password is wrong.
    /// Deliberately doesn't say which.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A user with this email (compared case-insensitively) already exists.
    #[error("email {0} is already registered")]
    DuplicateEmail(String),

    /// Another login or registration is still in flight on this manager.
    #[error("another authentication request is already in progress")]
    Busy,

    /// The user signed out while the request was still pending.
    #[error("authentication request cancelled by logout")]
    Cancelled,
}

impl AuthError {
    /// Translation key of the notification shown for this error.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "auth.login.invalid",
            Self::DuplicateEmail(_) => "auth.register.duplicate_email",
            Self::Busy => "auth.busy",
            Self::Cancelled => "auth.cancelled",
        }
    }
}
