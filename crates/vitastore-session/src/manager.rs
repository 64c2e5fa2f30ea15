//! The auth manager: owns the storefront's single current-user session.
//!
//! Responsibilities:
//! - Restoring the persisted session at startup
//! - Signing users in and up against the [`UserRegistry`]
//! - Persisting / clearing the session under [`SESSION_KEY`]
//! - Answering "is the current user an admin?"
//! - Raising a [`Notification`] for every user-visible outcome
//!
//! # Concurrency note
//!
//! The manager is meant to be built once and shared (`Arc<AuthManager>`).
//! Its locks are plain `std::sync::RwLock`s, never held across an
//! `.await`, so the read-side getters stay synchronous. Login and
//! registration are serialized by an in-flight flag: while one is pending,
//! a second one is rejected with [`AuthError::Busy`] instead of queueing.
//! A [`logout`](AuthManager::logout) during that wait wins: the pending
//! request finishes with [`AuthError::Cancelled`] and signs nobody in.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vitastore_storage::{Codec, JsonCodec, KeyValueStore, SESSION_KEY};

use crate::{
    AuthConfig, AuthError, AuthState, Authenticator, Delay, DemoAuthenticator, NewUser,
    Notification, Notifier, TokioDelay, User, UserRegistry,
};

/// Owns the current session and mediates sign-in and sign-up.
///
/// ## Lifecycle
///
/// ```text
/// new() ──→ initialize() ──→ login() / register() ──→ logout()
///              │                     │                    │
///              ▼                     ▼                    ▼
///   [Authenticated | Anonymous] [Authenticated]      [Anonymous]
/// ```
pub struct AuthManager<A: Authenticator = DemoAuthenticator, D: Delay = TokioDelay> {
    /// Every known user. Only `register` writes to it.
    registry: RwLock<UserRegistry>,

    /// The signed-in user, if any. `is_admin` is derived from this and
    /// never stored separately.
    current: RwLock<Option<User>>,

    /// Set once the persisted session has been read.
    initialized: AtomicBool,

    /// Set while a restore, login or registration is in flight. Doubles as
    /// the at-most-one-in-flight guard.
    loading: AtomicBool,

    /// Bumped by every logout. A pending login or registration that sees
    /// it change across its delay is abandoned.
    sign_outs: AtomicU64,

    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    authenticator: A,
    delay: D,
    codec: JsonCodec,
}

impl AuthManager {
    /// Creates a manager with the demo authenticator and a real
    /// `config.latency` pause.
    ///
    /// The manager starts [`AuthState::Uninitialized`]; call
    /// [`initialize`](Self::initialize) before reading the session.
    pub fn new(
        registry: UserRegistry,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        config: AuthConfig,
    ) -> Self {
        Self {
            registry: RwLock::new(registry),
            current: RwLock::new(None),
            initialized: AtomicBool::new(false),
            loading: AtomicBool::new(false),
            sign_outs: AtomicU64::new(0),
            store,
            notifier,
            authenticator: DemoAuthenticator::default(),
            delay: TokioDelay(config.latency),
            codec: JsonCodec,
        }
    }
}

impl<A: Authenticator, D: Delay> AuthManager<A, D> {
    /// Replaces the credential check.
    pub fn with_authenticator<B: Authenticator>(self, authenticator: B) -> AuthManager<B, D> {
        AuthManager {
            registry: self.registry,
            current: self.current,
            initialized: self.initialized,
            loading: self.loading,
            sign_outs: self.sign_outs,
            store: self.store,
            notifier: self.notifier,
            authenticator,
            delay: self.delay,
            codec: self.codec,
        }
    }

    /// Replaces the simulated latency, e.g. with [`NoDelay`](crate::NoDelay)
    /// in tests.
    pub fn with_delay<E: Delay>(self, delay: E) -> AuthManager<A, E> {
        AuthManager {
            registry: self.registry,
            current: self.current,
            initialized: self.initialized,
            loading: self.loading,
            sign_outs: self.sign_outs,
            store: self.store,
            notifier: self.notifier,
            authenticator: self.authenticator,
            delay,
            codec: self.codec,
        }
    }

    // =====================================================================
    // Startup
    // =====================================================================

    /// Restores the session persisted by a previous run.
    ///
    /// A missing blob means anonymous. An unreadable one is logged and
    /// also means anonymous; it is never reported to the caller. Always
    /// leaves the manager out of `Loading`.
    pub async fn initialize(&self) {
        let Ok(_in_flight) = self.begin() else {
            tracing::warn!("initialize skipped: an auth request is in flight");
            return;
        };

        let restored = match self.store.get(SESSION_KEY) {
            Ok(Some(blob)) => match self.codec.decode::<User>(&blob) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::error!(error = %e, "persisted session unreadable, starting anonymous");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!(error = %e, "persisted session unavailable, starting anonymous");
                None
            }
        };

        match &restored {
            Some(user) => tracing::info!(user_id = %user.id, "session restored"),
            None => tracing::debug!("no session to restore"),
        }

        *self.current_mut() = restored;
        self.initialized.store(true, Ordering::Release);
    }

    // =====================================================================
    // Login
    // =====================================================================

    /// Signs a user in by email or name.
    ///
    /// Returns `true` and raises a success notification when the
    /// credentials match; otherwise leaves the session untouched, raises an
    /// error notification and returns `false`.
    pub async fn login(&self, identifier: &str, password: &str) -> bool {
        match self.try_login(identifier, password).await {
            Ok(_) => {
                self.notifier.notify(Notification::success("auth.login.success"));
                true
            }
            Err(e) => {
                self.notifier.notify(Notification::error(e.message_key()));
                false
            }
        }
    }

    /// Like [`login`](Self::login), but reports the outcome as a `Result`
    /// and raises no notification.
    ///
    /// # Errors
    /// - [`AuthError::Busy`]: another login/registration is pending
    /// - [`AuthError::InvalidCredentials`]: nothing matched
    /// - [`AuthError::Cancelled`]: a logout happened while waiting
    pub async fn try_login(&self, identifier: &str, password: &str) -> Result<User, AuthError> {
        let _in_flight = self.begin()?;
        self.wait_unless_signed_out().await?;

        let user = self
            .authenticator
            .authenticate(&self.registry(), identifier, password)?;

        tracing::info!(user_id = %user.id, admin = user.is_admin, "login succeeded");
        self.start_session(user.clone());
        Ok(user)
    }

    // =====================================================================
    // Registration
    // =====================================================================

    /// Creates a customer account and signs it in.
    ///
    /// Returns `false` (with an error notification, and without touching
    /// the registry) if the email is already registered.
    pub async fn register(&self, new_user: NewUser) -> bool {
        match self.try_register(new_user).await {
            Ok(_) => {
                self.notifier.notify(Notification::success("auth.register.success"));
                true
            }
            Err(e) => {
                self.notifier.notify(Notification::error(e.message_key()));
                false
            }
        }
    }

    /// Like [`register`](Self::register), but reports the outcome as a
    /// `Result` and raises no notification.
    ///
    /// # Errors
    /// - [`AuthError::Busy`]: another login/registration is pending
    /// - [`AuthError::DuplicateEmail`]: the email is taken
    /// - [`AuthError::Cancelled`]: a logout happened while waiting; no
    ///   account is created
    pub async fn try_register(&self, new_user: NewUser) -> Result<User, AuthError> {
        let _in_flight = self.begin()?;
        self.wait_unless_signed_out().await?;

        let user = self.registry_mut().register(new_user)?;

        self.start_session(user.clone());
        Ok(user)
    }

    // =====================================================================
    // Logout
    // =====================================================================

    /// Ends the session and forgets the persisted one. Safe to call when
    /// nobody is signed in.
    ///
    /// A login or registration still waiting on its delay is cancelled, so
    /// it can't sign anyone back in afterwards.
    pub fn logout(&self) {
        self.sign_outs.fetch_add(1, Ordering::AcqRel);

        if let Some(user) = self.current_mut().take() {
            tracing::info!(user_id = %user.id, "session ended");
        }

        if let Err(e) = self.store.remove(SESSION_KEY) {
            tracing::warn!(error = %e, "failed to clear persisted session");
        }

        self.notifier.notify(Notification::info("auth.logout"));
    }

    // =====================================================================
    // Reads
    // =====================================================================

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.current().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// `true` iff someone is signed in and that user is an admin.
    /// Computed on every call.
    pub fn is_admin(&self) -> bool {
        self.current().as_ref().is_some_and(|u| u.is_admin)
    }

    /// `true` while a restore, login or registration is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn state(&self) -> AuthState {
        if self.is_loading() {
            AuthState::Loading
        } else if !self.initialized.load(Ordering::Acquire) {
            AuthState::Uninitialized
        } else if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    /// Snapshot of every registered user, for the back-office client list.
    pub fn registered_users(&self) -> Vec<User> {
        self.registry().users().to_vec()
    }

    // =====================================================================
    // Internals
    // =====================================================================

    /// Claims the in-flight slot, or fails if it's taken.
    fn begin(&self) -> Result<InFlight<'_>, AuthError> {
        self.loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlight(&self.loading))
            .map_err(|_| {
                tracing::debug!("auth request rejected: another one is in flight");
                AuthError::Busy
            })
    }

    /// Waits out the simulated latency, then fails if a logout landed in
    /// the meantime.
    async fn wait_unless_signed_out(&self) -> Result<(), AuthError> {
        let before = self.sign_outs.load(Ordering::Acquire);
        self.delay.wait().await;

        if self.sign_outs.load(Ordering::Acquire) != before {
            tracing::debug!("auth request cancelled by logout");
            return Err(AuthError::Cancelled);
        }
        Ok(())
    }

    /// Makes `user` the current session and persists it. A failed write
    /// is logged; the in-memory session stands.
    fn start_session(&self, user: User) {
        match self.codec.encode(&user) {
            Ok(blob) => {
                if let Err(e) = self.store.set(SESSION_KEY, &blob) {
                    tracing::warn!(error = %e, "failed to persist session");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to encode session"),
        }

        tracing::info!(user_id = %user.id, "session started");
        *self.current_mut() = Some(user);
    }

    fn registry(&self) -> RwLockReadGuard<'_, UserRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn registry_mut(&self) -> RwLockWriteGuard<'_, UserRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn current(&self) -> RwLockReadGuard<'_, Option<User>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_mut(&self) -> RwLockWriteGuard<'_, Option<User>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the in-flight slot when dropped, including when the owning
/// future is dropped mid-delay.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// =========================================================================
// Tests
// =========================================================================
