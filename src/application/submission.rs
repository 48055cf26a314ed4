//! Market submission: validate, call the wallet, persist, report.
//!
//! [`MarketCreator::create_market`] is the only entry point. It never
//! returns an error; every failure ends in a notification, and the returned
//! [`SubmissionOutcome`] tells the caller which path was taken.

use std::sync::Arc;

use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::application::form::MarketForm;
use crate::application::persistence::MarketPersistence;
use crate::domain::contract::{ContractCall, ContractTarget};
use crate::domain::id::TxId;
use crate::domain::notification::Notification;
use crate::port::outbound::notifier::Notifier;
use crate::port::outbound::store::MarketStore;
use crate::port::outbound::wallet::{WalletConnector, WalletOutcome};

pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a market question";
pub const CREATED_MESSAGE: &str =
    "Market created successfully. It will be visible after admin approval.";
pub const CANCELLED_MESSAGE: &str = "Market creation was cancelled";
pub const FAILED_MESSAGE: &str = "Failed to create market";

/// Which path a submission took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The draft had no question; nothing was sent.
    Rejected,
    /// The wallet created the market. `stored` reports whether the backend
    /// accepted the record.
    Created { tx_id: TxId, stored: bool },
    /// The user declined the call in the wallet.
    Cancelled,
    /// The call could not be built or the wallet failed.
    Failed { error: String },
}

impl SubmissionOutcome {
    /// True for outcomes that should not be treated as errors by a caller.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Created { .. } | Self::Cancelled)
    }
}

/// Submits market creation requests.
///
/// The contract target is injected at construction, so nothing here reads
/// process environment.
pub struct MarketCreator {
    target: ContractTarget,
    wallet: Arc<dyn WalletConnector>,
    persistence: MarketPersistence,
    notifier: Arc<dyn Notifier>,
}

impl MarketCreator {
    pub fn new(
        target: ContractTarget,
        wallet: Arc<dyn WalletConnector>,
        store: Arc<dyn MarketStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            target,
            wallet,
            persistence: MarketPersistence::new(store, Arc::clone(&notifier)),
            notifier,
        }
    }

    #[must_use]
    pub fn target(&self) -> &ContractTarget {
        &self.target
    }

    /// Submit the form's draft.
    ///
    /// The submitting flag is raised once the question passes validation and
    /// is always lowered before this returns, including after a successful
    /// creation.
    pub async fn create_market(&self, form: &mut MarketForm) -> SubmissionOutcome {
        if !form.draft().has_question() {
            self.notifier
                .notify(Notification::error(EMPTY_QUESTION_MESSAGE));
            return SubmissionOutcome::Rejected;
        }

        let span = info_span!("submission", submission_id = %Uuid::new_v4());
        form.begin_submission();
        let outcome = self.dispatch(form).instrument(span).await;
        form.end_submission();
        outcome
    }

    async fn dispatch(&self, form: &mut MarketForm) -> SubmissionOutcome {
        let call = match ContractCall::create_market(&self.target, form.draft()) {
            Ok(call) => call,
            Err(e) => return self.fail(e.to_string()),
        };

        info!(
            wallet = self.wallet.name(),
            contract = %self.target.identifier(),
            network = %call.network,
            args = ?call.uint_args(),
            "Requesting contract call"
        );

        match self.wallet.contract_call(&call).await {
            WalletOutcome::Completed { tx_id } => {
                info!(tx_id = %tx_id, "Contract call finished");
                form.record_tx_id(tx_id.clone());
                let stored = self.persistence.persist(form.draft(), &tx_id).await;
                self.notifier.notify(Notification::success(CREATED_MESSAGE));
                SubmissionOutcome::Created { tx_id, stored }
            }
            WalletOutcome::Cancelled => {
                info!("Contract call was cancelled");
                form.end_submission();
                self.notifier
                    .notify(Notification::warning("Cancelled", CANCELLED_MESSAGE));
                SubmissionOutcome::Cancelled
            }
            WalletOutcome::Failed { error } => self.fail(error),
        }
    }

    fn fail(&self, error: String) -> SubmissionOutcome {
        error!(error = %error, "Error creating market");
        self.notifier.notify(Notification::error(FAILED_MESSAGE));
        SubmissionOutcome::Failed { error }
    }
}
