//! Market draft: the editable parameters of a market before submission.
//!
//! Setters replace values unconditionally apart from clamping into the
//! field's numeric range, mirroring how a bounded number input behaves.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Default initial liquidity, in whole tokens.
pub const DEFAULT_INITIAL_LIQUIDITY: Decimal = dec!(1000);
/// Default implied probability of YES, in percent.
pub const DEFAULT_YES_PERCENTAGE: Decimal = dec!(50);
/// Default trading fee, in percent.
pub const DEFAULT_FEE_PERCENTAGE: Decimal = dec!(1);

/// Smallest accepted initial liquidity.
pub const MIN_INITIAL_LIQUIDITY: Decimal = dec!(1);
/// Bounds for the YES percentage.
pub const MIN_YES_PERCENTAGE: Decimal = dec!(1);
pub const MAX_YES_PERCENTAGE: Decimal = dec!(99);
/// Bounds for the fee percentage.
pub const MIN_FEE_PERCENTAGE: Decimal = dec!(0);
pub const MAX_FEE_PERCENTAGE: Decimal = dec!(10);
/// Input step for the fee percentage.
pub const FEE_PERCENTAGE_STEP: Decimal = dec!(0.1);

/// Unsubmitted market parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDraft {
    question: String,
    initial_liquidity: Decimal,
    yes_percentage: Decimal,
    fee_percentage: Decimal,
}

impl Default for MarketDraft {
    fn default() -> Self {
        Self {
            question: String::new(),
            initial_liquidity: DEFAULT_INITIAL_LIQUIDITY,
            yes_percentage: DEFAULT_YES_PERCENTAGE,
            fee_percentage: DEFAULT_FEE_PERCENTAGE,
        }
    }
}

impl MarketDraft {
    /// Create a draft from explicit values, clamping each numeric field.
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        initial_liquidity: Decimal,
        yes_percentage: Decimal,
        fee_percentage: Decimal,
    ) -> Self {
        let mut draft = Self::default();
        draft.set_question(question);
        draft.set_initial_liquidity(initial_liquidity);
        draft.set_yes_percentage(yes_percentage);
        draft.set_fee_percentage(fee_percentage);
        draft
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn initial_liquidity(&self) -> Decimal {
        self.initial_liquidity
    }

    #[must_use]
    pub fn yes_percentage(&self) -> Decimal {
        self.yes_percentage
    }

    #[must_use]
    pub fn fee_percentage(&self) -> Decimal {
        self.fee_percentage
    }

    /// True when the question has at least one non-whitespace character.
    #[must_use]
    pub fn has_question(&self) -> bool {
        !self.question.trim().is_empty()
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub fn set_initial_liquidity(&mut self, liquidity: Decimal) {
        self.initial_liquidity = liquidity.max(MIN_INITIAL_LIQUIDITY);
    }

    pub fn set_yes_percentage(&mut self, percentage: Decimal) {
        self.yes_percentage = percentage.clamp(MIN_YES_PERCENTAGE, MAX_YES_PERCENTAGE);
    }

    pub fn set_fee_percentage(&mut self, percentage: Decimal) {
        self.fee_percentage = percentage.clamp(MIN_FEE_PERCENTAGE, MAX_FEE_PERCENTAGE);
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Initial pool split: `(yes_pool, no_pool)`.
    ///
    /// Computed in exact decimal arithmetic so the pools always sum to the
    /// initial liquidity.
    #[must_use]
    pub fn pools(&self) -> (Decimal, Decimal) {
        let yes_share = self.yes_percentage / dec!(100);
        let yes_pool = self.initial_liquidity * yes_share;
        let no_pool = self.initial_liquidity * (Decimal::ONE - yes_share);
        (yes_pool, no_pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_matches_form_defaults() {
        let draft = MarketDraft::default();
        assert_eq!(draft.question(), "");
        assert_eq!(draft.initial_liquidity(), dec!(1000));
        assert_eq!(draft.yes_percentage(), dec!(50));
        assert_eq!(draft.fee_percentage(), dec!(1));
    }

    #[test]
    fn setters_clamp_into_field_ranges() {
        let mut draft = MarketDraft::default();

        draft.set_initial_liquidity(dec!(0));
        assert_eq!(draft.initial_liquidity(), dec!(1));

        draft.set_yes_percentage(dec!(150));
        assert_eq!(draft.yes_percentage(), dec!(99));
        draft.set_yes_percentage(dec!(0));
        assert_eq!(draft.yes_percentage(), dec!(1));

        draft.set_fee_percentage(dec!(12.5));
        assert_eq!(draft.fee_percentage(), dec!(10));
        draft.set_fee_percentage(dec!(-3));
        assert_eq!(draft.fee_percentage(), dec!(0));
    }

    #[test]
    fn setters_keep_in_range_values() {
        let draft = MarketDraft::new("Will it rain?", dec!(2000), dec!(60), dec!(2.5));
        assert_eq!(draft.initial_liquidity(), dec!(2000));
        assert_eq!(draft.yes_percentage(), dec!(60));
        assert_eq!(draft.fee_percentage(), dec!(2.5));
    }

    #[test]
    fn whitespace_question_is_not_a_question() {
        let mut draft = MarketDraft::default();
        assert!(!draft.has_question());
        draft.set_question(" \t\n ");
        assert!(!draft.has_question());
        draft.set_question(" Will it rain? ");
        assert!(draft.has_question());
    }

    #[test]
    fn pools_sum_to_liquidity_for_every_yes_percentage() {
        for yes in 1..=99 {
            let draft = MarketDraft::new("q", dec!(1234.567), Decimal::from(yes), dec!(1));
            let (yes_pool, no_pool) = draft.pools();
            assert_eq!(yes_pool + no_pool, draft.initial_liquidity(), "yes% = {yes}");
        }
    }

    #[test]
    fn pools_split_example_market() {
        let draft = MarketDraft::new("Will it rain?", dec!(2000), dec!(60), dec!(2));
        assert_eq!(draft.pools(), (dec!(1200), dec!(800)));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut draft = MarketDraft::new("q", dec!(5), dec!(10), dec!(3));
        draft.reset();
        assert_eq!(draft, MarketDraft::default());
    }
}
