//! Outbound adapters (driven side).

pub mod backend;
pub mod notifier;
pub mod wallet;
