//! The simulated network latency in front of login and registration.
//!
//! There is no server to talk to, but the storefront still makes sign-in
//! feel like a round trip. Putting the pause behind [`Delay`] lets tests
//! swap in [`NoDelay`] instead of sleeping.

use std::future::Future;
use std::time::Duration;

/// An awaitable pause.
pub trait Delay: Send + Sync + 'static {
    /// Resolves once the simulated round trip is over.
    fn wait(&self) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer for a fixed duration.
///
/// Under `tokio::time::pause()` the sleep auto-advances, so tests that
/// want the real delay path still run instantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokioDelay(pub Duration);

impl Delay for TokioDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl Delay for NoDelay {
    async fn wait(&self) {}
}
