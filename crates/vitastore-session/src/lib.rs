//! Customer session management for Vitastore.
//!
//! This crate owns "who is signed in":
//!
//! 1. **Users**: the [`User`] record and the in-memory [`UserRegistry`]
//! 2. **Authentication**: deciding which record a credential pair
//!    unlocks ([`Authenticator`] trait, [`DemoAuthenticator`])
//! 3. **Session tracking**: the single current-user slot, its
//!    persistence and the admin projection ([`AuthManager`])
//!
//! Two seams keep the manager testable: [`Delay`] stands in for network
//! latency, and [`Notifier`] carries the toasts the UI shows.
//!
//! # How it fits in the stack
//!
//! ```text
//! Storefront / back-office (above)  ← reads current_user(), is_admin()
//!     ↕
//! Session Layer (this crate)        ← login, register, logout
//!     ↕
//! Storage Layer (below)             ← persists the user under "user"
//! ```

#![allow(async_fn_in_trait)]

mod auth;
mod delay;
mod error;
mod manager;
mod notify;
mod registry;
mod state;
mod user;

pub use auth::{Authenticator, DemoAuthenticator};
pub use delay::{Delay, NoDelay, TokioDelay};
pub use error::AuthError;
pub use manager::AuthManager;
pub use notify::{ChannelNotifier, LogNotifier, Notification, NotificationLevel, Notifier};
pub use registry::UserRegistry;
pub use state::{AuthConfig, AuthState};
pub use user::{NewUser, User};
