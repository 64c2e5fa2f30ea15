//! Process-level configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Where the storefront keeps its state and how slow the simulated backend is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// File backing the persistent store. `None` keeps everything in
    /// memory for the life of the process.
    pub data_path: Option<PathBuf>,

    /// Simulated round-trip time of login and registration.
    pub auth_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            auth_latency: Duration::from_millis(800),
        }
    }
}

impl AppConfig {
    /// Reads `VITASTORE_DATA_PATH` and `VITASTORE_AUTH_LATENCY_MS`.
    ///
    /// Unset, blank or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("VITASTORE_DATA_PATH").filter(|p| !p.trim().is_empty()) {
            config.data_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup("VITASTORE_AUTH_LATENCY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.auth_latency = Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring invalid VITASTORE_AUTH_LATENCY_MS")
                }
            }
        }

        config
    }
}
