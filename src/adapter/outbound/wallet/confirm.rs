//! Human approval in front of another wallet connector.

use std::sync::Arc;

use async_trait::async_trait;
use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::info;

use crate::adapter::inbound::cli::output;
use crate::domain::contract::ContractCall;
use crate::error::Result;
use crate::port::outbound::wallet::{WalletConnector, WalletOutcome};

/// Decides whether a contract call may go to the wallet.
///
/// Called on a blocking thread; implementations may wait for user input.
pub trait Approve: Send + Sync {
    /// `Ok(true)` to forward the call, `Ok(false)` to cancel it.
    ///
    /// # Errors
    ///
    /// Returns an error if no decision could be obtained.
    fn approve(&self, call: &ContractCall) -> Result<bool>;
}

/// Approves every call (`--yes`).
pub struct AutoApprove;

impl Approve for AutoApprove {
    fn approve(&self, _call: &ContractCall) -> Result<bool> {
        Ok(true)
    }
}

/// Asks on the terminal.
pub struct TerminalApprover;

impl Approve for TerminalApprover {
    fn approve(&self, call: &ContractCall) -> Result<bool> {
        output::section("Contract call");
        output::field("Network", call.network);
        output::field(
            "Contract",
            format!("{}.{}", call.contract_address, call.contract_name),
        );
        output::field("Function", &call.function_name);
        let args: Vec<String> = call.function_args.iter().map(ToString::to_string).collect();
        output::field("Arguments", args.join(" "));

        let approved = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Send this call to your wallet?")
            .default(false)
            .interact()?;
        Ok(approved)
    }
}

/// Wallet connector that asks an [`Approve`] before forwarding.
///
/// A declined call is reported as [`WalletOutcome::Cancelled`] without
/// reaching the wrapped connector.
pub struct ConfirmingWallet {
    inner: Arc<dyn WalletConnector>,
    approver: Arc<dyn Approve>,
}

impl ConfirmingWallet {
    pub fn new(inner: Arc<dyn WalletConnector>, approver: Arc<dyn Approve>) -> Self {
        Self { inner, approver }
    }
}

#[async_trait]
impl WalletConnector for ConfirmingWallet {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn contract_call(&self, call: &ContractCall) -> WalletOutcome {
        let approver = Arc::clone(&self.approver);
        let pending = call.clone();
        let decision = tokio::task::spawn_blocking(move || approver.approve(&pending)).await;

        match decision {
            Ok(Ok(true)) => self.inner.contract_call(call).await,
            Ok(Ok(false)) => {
                info!("Contract call declined at prompt");
                WalletOutcome::Cancelled
            }
            Ok(Err(e)) => WalletOutcome::failed(e),
            Err(e) => WalletOutcome::failed(e),
        }
    }
}
