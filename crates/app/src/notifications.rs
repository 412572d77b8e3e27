//! Shared notification queue
//!
//! One instance is constructed at startup with fixed display
//! configuration and shared through the app context. Producers call the
//! small functional interface; the embedding shell drains the queue and
//! renders however it likes. Nothing here blocks or fails.

use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::Mutex;

/// Where toasts are anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Display configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub placement: Placement,
    pub duration: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { placement: Placement::TopRight, duration: Duration::from_secs(3) }
    }
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// One queued toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub description: Option<String>,
}

/// The shared notification queue.
pub struct NotificationCenter {
    config: NotificationConfig,
    queue: Mutex<VecDeque<Notification>>,
}

impl NotificationCenter {
    pub fn new(config: NotificationConfig) -> Self {
        Self { config, queue: Mutex::new(VecDeque::new()) }
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    pub fn show(
        &self,
        kind: NotificationKind,
        message: impl Into<String>,
        description: Option<String>,
    ) {
        self.queue.lock().push_back(Notification { kind, message: message.into(), description });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message, None);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message, None);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(NotificationKind::Warning, message, None);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(NotificationKind::Info, message, None);
    }

    /// Take everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue.lock().drain(..).collect()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_fifo_order() {
        let center = NotificationCenter::default();
        center.success("redeemed");
        center.error("out of stock");

        let drained = center.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].kind, NotificationKind::Success);
        assert_eq!(drained[1].kind, NotificationKind::Error);
        assert!(center.drain().is_empty());
    }

    #[test]
    fn default_config_matches_the_shell_contract() {
        let center = NotificationCenter::default();
        assert_eq!(center.config().placement, Placement::TopRight);
        assert_eq!(center.config().duration, Duration::from_secs(3));
    }
}
