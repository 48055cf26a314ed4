//! The denormalized market record stored by the backend.

use rust_decimal::Decimal;
use serde::Serialize;

use super::draft::MarketDraft;
use super::id::TxId;

/// A market as persisted by the backend after on-chain creation.
///
/// New records are always hidden; an admin approval step outside this crate
/// makes them visible. Amounts are sent as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    question: String,
    #[serde(with = "rust_decimal::serde::float")]
    yes_pool: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    no_pool: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    total_liquidity: Decimal,
    tx_id: TxId,
    visible: bool,
}

impl MarketRecord {
    /// Build the record for a draft whose contract call produced `tx_id`.
    #[must_use]
    pub fn new(draft: &MarketDraft, tx_id: TxId) -> Self {
        let (yes_pool, no_pool) = draft.pools();
        Self {
            question: draft.question().to_string(),
            yes_pool,
            no_pool,
            total_liquidity: draft.initial_liquidity(),
            tx_id,
            visible: false,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn yes_pool(&self) -> Decimal {
        self.yes_pool
    }

    #[must_use]
    pub fn no_pool(&self) -> Decimal {
        self.no_pool
    }

    #[must_use]
    pub fn total_liquidity(&self) -> Decimal {
        self.total_liquidity
    }

    #[must_use]
    pub fn tx_id(&self) -> &TxId {
        &self.tx_id
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }
}
