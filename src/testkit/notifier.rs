//! Notifier that keeps every notification for assertions.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::notification::{Notification, Severity};
use crate::port::outbound::notifier::Notifier;

use super::journal::Journal;

/// Thread-safe notification collector.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
    journal: Option<Journal>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Descriptions of notifications with the given severity, in order.
    pub fn descriptions(&self, severity: Severity) -> Vec<String> {
        self.notifications
            .lock()
            .iter()
            .filter(|n| n.severity == severity)
            .map(|n| n.description.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Some(journal) = &self.journal {
            journal.record(format!(
                "notify:{}:{}",
                notification.severity, notification.description
            ));
        }
        self.notifications.lock().push(notification);
    }
}
