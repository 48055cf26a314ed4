//! Market store port: backend persistence for created markets.

use async_trait::async_trait;

use crate::domain::record::MarketRecord;
use crate::error::PersistError;

/// Backend that stores market records after on-chain creation.
///
/// The response body is opaque to callers; it is only logged.
#[async_trait]
pub trait MarketStore: Send + Sync {
    /// Store a record, returning the backend's response body.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistError`] classifying why the record was not stored.
    async fn store(&self, record: &MarketRecord) -> Result<serde_json::Value, PersistError>;
}
