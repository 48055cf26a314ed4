//! Chain- and transport-agnostic market creation types.
//!
//! - [`draft`] - Editable market parameters and their ranges
//! - [`contract`] - The `create-market` contract call derived from a draft
//! - [`record`] - The market record persisted by the backend
//! - [`notification`] - Messages surfaced to the user
//! - [`id`] - Identifier newtypes
//! - [`error`] - Domain validation errors

pub mod contract;
pub mod draft;
pub mod error;
pub mod id;
pub mod notification;
pub mod record;

pub use contract::{ClarityValue, ContractCall, ContractTarget, Network, PostConditionMode};
pub use draft::MarketDraft;
pub use error::DomainError;
pub use id::TxId;
pub use notification::{Lifetime, Notification, Severity};
pub use record::MarketRecord;
