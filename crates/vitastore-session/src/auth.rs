//! Credential checking.
//!
//! The storefront has no identity backend: logins are checked against the
//! in-memory [`UserRegistry`] with a shared demo password. That check sits
//! behind the [`Authenticator`] trait so the manager never hardcodes it,
//! and a real check can replace [`DemoAuthenticator`] without touching
//! session handling.

use crate::{AuthError, User, UserRegistry};

/// Decides which registry record, if any, a credential pair unlocks.
///
/// `Send + Sync + 'static` because the authenticator lives inside the
/// shared [`AuthManager`](crate::AuthManager) for the whole process.
///
/// # Example
///
/// ```rust
/// use vitastore_session::{AuthError, Authenticator, User, UserRegistry};
///
/// /// Lets anyone in as long as the registry knows them.
/// struct TrustingAuthenticator;
///
/// impl Authenticator for TrustingAuthenticator {
///     fn authenticate(
///         &self,
///         registry: &UserRegistry,
///         identifier: &str,
///         _password: &str,
///     ) -> Result<User, AuthError> {
///         registry
///             .find_by_identifier(identifier)
///             .cloned()
///             .ok_or(AuthError::InvalidCredentials)
///     }
/// }
/// ```
pub trait Authenticator: Send + Sync + 'static {
    /// Returns the user the credentials belong to.
    ///
    /// # Errors
    /// [`AuthError::InvalidCredentials`] when nothing matches.
    fn authenticate(
        &self,
        registry: &UserRegistry,
        identifier: &str,
        password: &str,
    ) -> Result<User, AuthError>;
}

/// The storefront's simulated login check.
///
/// Two paths, tried in order:
///
/// 1. **Admin**: `identifier` exactly equal to `admin_username` (case
///    matters) and `password` equal to `admin_password` unlocks the
///    registry's admin record.
/// 2. **Generic**: any record whose email or name matches `identifier`
///    (case-insensitive), provided `password` equals `demo_password`.
///
/// This is a plain string comparison, not a password check. It exists so
/// the demo data can be browsed; nothing here is fit for real accounts.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    pub admin_username: String,
    pub admin_password: String,
    pub demo_password: String,
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self {
            admin_username: "Admin".to_string(),
            admin_password: "Admin@123".to_string(),
            demo_password: "123456".to_string(),
        }
    }
}

impl Authenticator for DemoAuthenticator {
    fn authenticate(
        &self,
        registry: &UserRegistry,
        identifier: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if identifier == self.admin_username && password == self.admin_password {
            match registry.admin() {
                Some(admin) => return Ok(admin.clone()),
                // Fall through: the generic path decides.
                None => tracing::warn!("admin credentials used but registry has no admin"),
            }
        }

        let user = registry.find_by_identifier(identifier).ok_or_else(|| {
            tracing::debug!(identifier, "login rejected: unknown identifier");
            AuthError::InvalidCredentials
        })?;

        if password != self.demo_password {
            tracing::debug!(user_id = %user.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user.clone())
    }
}
