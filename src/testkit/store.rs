//! In-memory [`MarketStore`] with a scripted reply.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;

use crate::domain::record::MarketRecord;
use crate::error::PersistError;
use crate::port::outbound::store::MarketStore;

use super::journal::Journal;

/// Records every market it is asked to store.
///
/// Replies with `{"ok": true}` unless built with [`RecordingStore::failing`].
pub struct RecordingStore {
    reply: Result<serde_json::Value, PersistError>,
    records: Arc<Mutex<Vec<MarketRecord>>>,
    journal: Option<Journal>,
}

impl RecordingStore {
    pub fn accepting() -> Self {
        Self {
            reply: Ok(json!({ "ok": true })),
            records: Arc::new(Mutex::new(Vec::new())),
            journal: None,
        }
    }

    pub fn failing(error: PersistError) -> Self {
        Self {
            reply: Err(error),
            ..Self::accepting()
        }
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Every record received, including ones the scripted reply rejected.
    pub fn records(&self) -> Vec<MarketRecord> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl MarketStore for RecordingStore {
    async fn store(&self, record: &MarketRecord) -> Result<serde_json::Value, PersistError> {
        if let Some(journal) = &self.journal {
            journal.record(format!("store:{}", record.tx_id()));
        }
        self.records.lock().push(record.clone());
        self.reply.clone()
    }
}
