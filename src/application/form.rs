//! Market creation form state.
//!
//! Owns the editable draft plus the two flags the form displays: whether a
//! submission is in flight, and the id of the last created transaction.

use rust_decimal::Decimal;

use crate::domain::draft::MarketDraft;
use crate::domain::id::TxId;

/// State behind the market creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketForm {
    draft: MarketDraft,
    is_submitting: bool,
    tx_id: Option<TxId>,
}

impl MarketForm {
    /// Create a form holding the default draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form pre-filled with a draft.
    #[must_use]
    pub fn with_draft(draft: MarketDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn draft(&self) -> &MarketDraft {
        &self.draft
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Transaction id of the last completed wallet call, if any.
    #[must_use]
    pub fn tx_id(&self) -> Option<&TxId> {
        self.tx_id.as_ref()
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.draft.set_question(question);
    }

    pub fn set_initial_liquidity(&mut self, liquidity: Decimal) {
        self.draft.set_initial_liquidity(liquidity);
    }

    pub fn set_yes_percentage(&mut self, percentage: Decimal) {
        self.draft.set_yes_percentage(percentage);
    }

    pub fn set_fee_percentage(&mut self, percentage: Decimal) {
        self.draft.set_fee_percentage(percentage);
    }

    /// Restore the default draft and forget the last transaction id.
    ///
    /// The submitting flag belongs to the in-flight submission and is left
    /// alone.
    pub fn reset_form(&mut self) {
        self.draft.reset();
        self.tx_id = None;
    }

    pub(crate) fn begin_submission(&mut self) {
        self.is_submitting = true;
    }

    pub(crate) fn end_submission(&mut self) {
        self.is_submitting = false;
    }

    pub(crate) fn record_tx_id(&mut self, tx_id: TxId) {
        self.tx_id = Some(tx_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn reset_form_restores_defaults_and_clears_tx_id() {
        let mut form = MarketForm::new();
        form.set_question("Will it rain?");
        form.set_initial_liquidity(dec!(2000));
        form.set_yes_percentage(dec!(60));
        form.set_fee_percentage(dec!(2));
        form.record_tx_id(TxId::new("0xfeed"));

        form.reset_form();

        assert_eq!(form.draft().question(), "");
        assert_eq!(form.draft().initial_liquidity(), dec!(1000));
        assert_eq!(form.draft().yes_percentage(), dec!(50));
        assert_eq!(form.draft().fee_percentage(), dec!(1));
        assert_eq!(form.tx_id(), None);
    }

    #[test]
    fn reset_form_on_fresh_form_is_a_no_op() {
        let mut form = MarketForm::new();
        form.reset_form();
        assert_eq!(form, MarketForm::new());
    }

    #[test]
    fn setters_delegate_to_draft_with_clamping() {
        let mut form = MarketForm::new();
        form.set_yes_percentage(dec!(100));
        form.set_fee_percentage(dec!(0.3));
        assert_eq!(form.draft().yes_percentage(), dec!(99));
        assert_eq!(form.draft().fee_percentage(), dec!(0.3));
    }

    #[test]
    fn submission_flags_toggle() {
        let mut form = MarketForm::new();
        assert!(!form.is_submitting());
        form.begin_submission();
        assert!(form.is_submitting());
        form.end_submission();
        assert!(!form.is_submitting());
    }
}
