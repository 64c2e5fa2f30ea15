//! User-facing notifications ("toasts") raised by the session layer.
//!
//! The manager doesn't know how the UI shows a toast. It hands a
//! [`Notification`] to whatever [`Notifier`] it was built with. The
//! notification carries a translation key, not text, so the UI renders it
//! in the visitor's language.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// How a notification should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A single toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,

    /// Translation key of the message, e.g. `"auth.login.success"`.
    pub key: String,
}

impl Notification {
    pub fn success(key: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, key)
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, key)
    }

    fn new(level: NotificationLevel, key: impl Into<String>) -> Self {
        Self {
            level,
            key: key.into(),
        }
    }
}

/// Delivers notifications to the user.
///
/// Delivery is fire-and-forget: a notifier that can't deliver drops the
/// notification rather than failing the operation that raised it.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log. The default when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => {
                tracing::warn!(key = %notification.key, "notification");
            }
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!(key = %notification.key, "notification");
            }
        }
    }
}

/// Forwards notifications over an unbounded channel to a UI task.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Creates the notifier and the receiving end the UI drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.tx.send(notification) {
            tracing::debug!(key = %e.0.key, "notification dropped: receiver gone");
        }
    }
}
