//! Wallet connector port.
//!
//! A wallet executes contract calls on the user's behalf. The call is
//! user-mediated: a human may approve or reject it, so the port reports a
//! tagged outcome instead of a plain result.

use async_trait::async_trait;

use crate::domain::contract::ContractCall;
use crate::domain::id::TxId;

/// How a contract call ended from the wallet's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletOutcome {
    /// The transaction was broadcast and has this id.
    Completed { tx_id: TxId },
    /// The user declined the call.
    Cancelled,
    /// The wallet could not execute the call.
    Failed { error: String },
}

impl WalletOutcome {
    /// Shorthand for a `Failed` outcome from any displayable error.
    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }
}

/// A wallet able to execute contract calls.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// Implementations never return an error: transport and signing failures are
/// reported as [`WalletOutcome::Failed`].
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Return the connector name for logging.
    fn name(&self) -> &'static str;

    /// Execute a contract call and wait for the user's decision.
    async fn contract_call(&self, call: &ContractCall) -> WalletOutcome;
}
