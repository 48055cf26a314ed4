//! Domain validation errors for core domain types.
//!
//! These errors are returned when a draft cannot be turned into a contract
//! call, e.g. a scaled amount that does not fit an unsigned argument.
//!
//! # Examples
//!
//! ```
//! use marketwright::domain::contract::ClarityValue;
//! use marketwright::domain::error::DomainError;
//! use rust_decimal_macros::dec;
//!
//! let result = ClarityValue::uint_scaled("fee_percentage", dec!(-1), 100);
//! assert!(matches!(result, Err(DomainError::ArgumentOutOfRange { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A scaled value cannot be encoded as an unsigned contract argument.
    #[error("{field} = {value} cannot be encoded as an unsigned contract argument")]
    ArgumentOutOfRange {
        /// Name of the draft field being encoded.
        field: &'static str,
        /// The scaled value that was rejected.
        value: Decimal,
    },
}
