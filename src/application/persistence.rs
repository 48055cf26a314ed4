//! Backend persistence of markets created on chain.
//!
//! Persistence failures are absorbed here: they become a single persistent
//! warning and never reach the submission flow.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::draft::MarketDraft;
use crate::domain::id::TxId;
use crate::domain::notification::Notification;
use crate::domain::record::MarketRecord;
use crate::port::outbound::notifier::Notifier;
use crate::port::outbound::store::MarketStore;

/// Prefix of the warning shown when the backend did not store a market.
pub const STORE_FAILED_MESSAGE: &str =
    "Market created on blockchain but failed to store in database";

/// Success message once the backend has stored a market.
pub const STORED_MESSAGE: &str = "Market created and stored in database";

/// Stores created markets and reports the result.
pub struct MarketPersistence {
    store: Arc<dyn MarketStore>,
    notifier: Arc<dyn Notifier>,
}

impl MarketPersistence {
    pub fn new(store: Arc<dyn MarketStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Store the market created by `tx_id` from `draft`.
    ///
    /// Returns whether the backend accepted the record. Failures have
    /// already been reported to the user when this returns `false`.
    pub async fn persist(&self, draft: &MarketDraft, tx_id: &TxId) -> bool {
        let record = MarketRecord::new(draft, tx_id.clone());
        info!(
            tx_id = %record.tx_id(),
            yes_pool = %record.yes_pool(),
            no_pool = %record.no_pool(),
            total_liquidity = %record.total_liquidity(),
            "Sending market record"
        );

        match self.store.store(&record).await {
            Ok(response) => {
                info!(tx_id = %tx_id, response = %response, "Market stored");
                self.notifier.notify(Notification::success(STORED_MESSAGE));
                true
            }
            Err(e) => {
                warn!(tx_id = %tx_id, error = ?e, "Failed to store market");
                self.notifier.notify(
                    Notification::warning("Warning", format!("{STORE_FAILED_MESSAGE} - {e}"))
                        .persistent(),
                );
                false
            }
        }
    }
}
