//! Notifier port for user-facing notifications.
//!
//! This module defines the trait through which submission outcomes reach
//! the user, so orchestration can run without a rendering surface.

use crate::domain::notification::Notification;

/// Trait for notification handlers.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - The `notify` method should return quickly and never fail; a lost
///   notification must not abort a submission
pub trait Notifier: Send + Sync {
    /// Show a notification.
    fn notify(&self, notification: Notification);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts notifications to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotifierRegistry {
    fn notify(&self, notification: Notification) {
        for notifier in &self.notifiers {
            notifier.notify(notification.clone());
        }
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// A logging notifier that logs notifications via tracing.
///
/// Logs at info so the default `warn` filter does not repeat what the
/// terminal already shows.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            severity = %notification.severity,
            title = %notification.title,
            description = %notification.description,
            persistent = notification.lifetime.is_persistent(),
            "Notification"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingNotifier {
        count: Arc<AtomicUsize>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, _notification: Notification) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_registry_notifies_all() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut registry = NotifierRegistry::new();

        registry.register(Box::new(CountingNotifier {
            count: count.clone(),
        }));
        registry.register(Box::new(CountingNotifier {
            count: count.clone(),
        }));

        registry.notify(Notification::success("stored"));

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_registry_len_and_is_empty() {
        let mut registry = NotifierRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register(Box::new(NullNotifier));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_log_notifier_accepts_every_severity() {
        LogNotifier.notify(Notification::success("ok"));
        LogNotifier.notify(Notification::warning("Warning", "hmm").persistent());
        LogNotifier.notify(Notification::error("bad"));
    }
}
