//! The in-memory user registry.
//!
//! A plain `Vec` is enough: the registry holds a handful of demo accounts
//! plus whoever signs up during the process lifetime, and every lookup is
//! a linear scan by email or name anyway.

use crate::user::eq_ignore_case;
use crate::{AuthError, NewUser, User};

/// Every user the storefront knows about.
///
/// Owned by the [`AuthManager`](crate::AuthManager), which is the only
/// writer. The registry is process-local: sign-ups are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from existing records.
    ///
    /// Only one record can be reached through the admin login. A fixture
    /// with several admins is accepted with a warning, and
    /// [`admin`](Self::admin) picks the first.
    pub fn with_users(users: Vec<User>) -> Self {
        let admins = users.iter().filter(|u| u.is_admin).count();
        if admins > 1 {
            tracing::warn!(
                admins,
                "registry has several admins; only the first can use the admin login"
            );
        }
        Self { users }
    }

    /// The storefront's demo accounts: one administrator and two
    /// customers. Every one of them accepts the demo password.
    pub fn demo() -> Self {
        Self::with_users(vec![
            User {
                id: "1".into(),
                email: "admin@vitastore.com".into(),
                name: "Admin".into(),
                is_admin: true,
                address: Some("Calle Mayor 1, Madrid".into()),
                phone: Some("+34 910 000 001".into()),
            },
            User {
                id: "2".into(),
                email: "usuario@ejemplo.com".into(),
                name: "Usuario Demo".into(),
                is_admin: false,
                address: Some("Avenida del Puerto 22, Valencia".into()),
                phone: Some("+34 600 123 456".into()),
            },
            User {
                id: "3".into(),
                email: "maria.garcia@ejemplo.com".into(),
                name: "María García".into(),
                is_admin: false,
                address: None,
                phone: None,
            },
        ])
    }

    /// Finds a user whose email or name equals `identifier`, ignoring case.
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&User> {
        self.users.iter().find(|u| u.matches_identifier(identifier))
    }

    /// Finds a user by email, ignoring case.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| eq_ignore_case(&u.email, email))
    }

    /// The administrator record, if the registry has one. With several,
    /// the first in registration order.
    pub fn admin(&self) -> Option<&User> {
        self.users.iter().find(|u| u.is_admin)
    }

    /// Adds a customer account and returns the stored record.
    ///
    /// The id is derived from the registry size; since the registry only
    /// grows, the first candidate is normally free, but seeded fixtures
    /// can use any ids, so collisions are skipped.
    ///
    /// # Errors
    /// Returns [`AuthError::DuplicateEmail`] if the email is taken.
    pub fn register(&mut self, new_user: NewUser) -> Result<User, AuthError> {
        if self.find_by_email(&new_user.email).is_some() {
            return Err(AuthError::DuplicateEmail(new_user.email));
        }

        let mut next = self.users.len() + 1;
        while self.users.iter().any(|u| u.id == next.to_string()) {
            next += 1;
        }

        let user = User {
            id: next.to_string(),
            email: new_user.email,
            name: new_user.name,
            is_admin: false,
            address: new_user.address,
            phone: new_user.phone,
        };
        self.users.push(user.clone());

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// All users, in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
