//! Wallet double replying with a fixed outcome.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::contract::ContractCall;
use crate::domain::id::TxId;
use crate::port::outbound::wallet::{WalletConnector, WalletOutcome};

use super::journal::Journal;

/// A wallet that answers every call with the same scripted outcome.
pub struct ScriptedWallet {
    outcome: WalletOutcome,
    calls: Arc<Mutex<Vec<ContractCall>>>,
    journal: Option<Journal>,
}

impl ScriptedWallet {
    pub fn new(outcome: WalletOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
            journal: None,
        }
    }

    pub fn completing(tx_id: &str) -> Self {
        Self::new(WalletOutcome::Completed {
            tx_id: TxId::new(tx_id),
        })
    }

    pub fn cancelling() -> Self {
        Self::new(WalletOutcome::Cancelled)
    }

    pub fn failing(error: &str) -> Self {
        Self::new(WalletOutcome::failed(error))
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl WalletConnector for ScriptedWallet {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn contract_call(&self, call: &ContractCall) -> WalletOutcome {
        if let Some(journal) = &self.journal {
            journal.record(format!("wallet:{}", call.function_name));
        }
        self.calls.lock().push(call.clone());
        self.outcome.clone()
    }
}
