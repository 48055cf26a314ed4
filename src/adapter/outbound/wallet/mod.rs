//! Wallet connector adapters.
//!
//! - [`bridge::WalletBridge`] - forwards calls to an HTTP wallet bridge
//! - [`confirm::ConfirmingWallet`] - asks for approval before forwarding

pub mod bridge;
pub mod confirm;

pub use bridge::WalletBridge;
pub use confirm::{Approve, AutoApprove, ConfirmingWallet, TerminalApprover};
