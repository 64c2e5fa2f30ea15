//! Session lifecycle state and configuration.

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// AuthConfig
// ---------------------------------------------------------------------------

/// Configuration for the [`AuthManager`](crate::AuthManager).
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Simulated round-trip time of login and registration.
    ///
    /// Default: 800 ms.
    pub latency: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(800),
        }
    }
}

// ---------------------------------------------------------------------------
// AuthState
// ---------------------------------------------------------------------------

/// Where the session manager is in its lifecycle.
///
/// ```text
/// Uninitialized ──(initialize)──→ Loading ──→ Authenticated
///                                    │              ↑ │
///                                    ▼     (login)  │ │ (logout)
///                                Anonymous ─────────┘ │
///                                    ↑────────────────┘
/// ```
///
/// - **Uninitialized**: the persisted session hasn't been read yet.
/// - **Loading**: a restore, login or registration is in flight.
/// - **Authenticated**: a current user is set.
/// - **Anonymous**: no current user.
///
/// There is no terminal state; after startup the manager moves between
/// `Authenticated` and `Anonymous` (through `Loading`) for as long as the
/// process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Uninitialized,
    Loading,
    Authenticated,
    Anonymous,
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Loading => write!(f, "Loading"),
            Self::Authenticated => write!(f, "Authenticated"),
            Self::Anonymous => write!(f, "Anonymous"),
        }
    }
}
