//! Ordered side-effect log shared between test doubles.

use std::sync::Arc;

use parking_lot::Mutex;

/// Append-only list of entries like `"wallet:create-market"`.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Index of the first entry starting with `prefix`.
    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.entries.lock().iter().position(|e| e.starts_with(prefix))
    }
}
