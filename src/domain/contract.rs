//! Contract-call requests for the market contract.
//!
//! A [`ContractCall`] is built fresh from a [`MarketDraft`] for every
//! submission: liquidity is converted to base units and percentages to
//! basis points, each floored to an unsigned integer.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::draft::MarketDraft;
use super::error::DomainError;

/// Name of the contract function that creates a market.
pub const CREATE_MARKET_FUNCTION: &str = "create-market";

/// Base units per whole token (micro-STX).
pub const MICRO_UNITS_PER_TOKEN: u64 = 1_000_000;

/// Basis points per percent.
pub const BASIS_POINTS_PER_PERCENT: u64 = 100;

/// Target blockchain network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Testnet => write!(f, "testnet"),
        }
    }
}

/// Whether client-declared balance-change assertions are enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostConditionMode {
    /// No post-conditions are enforced.
    #[default]
    Allow,
    /// Any transfer not covered by a post-condition aborts the transaction.
    Deny,
}

/// The deployed contract that receives market creation calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractTarget {
    pub network: Network,
    pub contract_address: String,
    pub contract_name: String,
}

impl ContractTarget {
    #[must_use]
    pub fn new(
        network: Network,
        contract_address: impl Into<String>,
        contract_name: impl Into<String>,
    ) -> Self {
        Self {
            network,
            contract_address: contract_address.into(),
            contract_name: contract_name.into(),
        }
    }

    /// Fully qualified contract identifier (`address.name`).
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}.{}", self.contract_address, self.contract_name)
    }
}

/// A typed contract argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClarityValue {
    UInt(u128),
}

impl ClarityValue {
    /// Encode `value * scale`, floored, as an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ArgumentOutOfRange`] when the scaled value is
    /// negative or does not fit in 128 bits.
    pub fn uint_scaled(
        field: &'static str,
        value: Decimal,
        scale: u64,
    ) -> Result<Self, DomainError> {
        let scaled = value
            .checked_mul(Decimal::from(scale))
            .ok_or(DomainError::ArgumentOutOfRange { field, value })?
            .floor();
        scaled
            .to_u128()
            .map(Self::UInt)
            .ok_or(DomainError::ArgumentOutOfRange {
                field,
                value: scaled,
            })
    }

    /// The unsigned value, if this is a `uint`.
    #[must_use]
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            Self::UInt(v) => Some(*v),
        }
    }
}

impl fmt::Display for ClarityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt(v) => write!(f, "u{v}"),
        }
    }
}

// 128-bit integers do not survive JSON number parsing on most wallet
// runtimes, so the value travels as a decimal string.
impl Serialize for ClarityValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClarityValue", 2)?;
        match self {
            Self::UInt(v) => {
                state.serialize_field("type", "uint")?;
                state.serialize_field("value", &v.to_string())?;
            }
        }
        state.end()
    }
}

/// A contract-call request handed to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCall {
    pub network: Network,
    pub contract_address: String,
    pub contract_name: String,
    pub function_name: String,
    pub function_args: Vec<ClarityValue>,
    pub post_condition_mode: PostConditionMode,
}

impl ContractCall {
    /// Build the `create-market` call for a draft.
    ///
    /// Arguments, in order: liquidity in base units, YES percentage in basis
    /// points, fee percentage in basis points.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ArgumentOutOfRange`] if any scaled value is not
    /// representable as an unsigned integer.
    pub fn create_market(target: &ContractTarget, draft: &MarketDraft) -> Result<Self, DomainError> {
        let function_args = vec![
            ClarityValue::uint_scaled(
                "initial_liquidity",
                draft.initial_liquidity(),
                MICRO_UNITS_PER_TOKEN,
            )?,
            ClarityValue::uint_scaled(
                "yes_percentage",
                draft.yes_percentage(),
                BASIS_POINTS_PER_PERCENT,
            )?,
            ClarityValue::uint_scaled(
                "fee_percentage",
                draft.fee_percentage(),
                BASIS_POINTS_PER_PERCENT,
            )?,
        ];

        Ok(Self {
            network: target.network,
            contract_address: target.contract_address.clone(),
            contract_name: target.contract_name.clone(),
            function_name: CREATE_MARKET_FUNCTION.to_string(),
            function_args,
            post_condition_mode: PostConditionMode::Allow,
        })
    }

    /// Argument values as plain integers, in call order.
    #[must_use]
    pub fn uint_args(&self) -> Vec<u128> {
        self.function_args
            .iter()
            .filter_map(ClarityValue::as_u128)
            .collect()
    }
}
