//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the external collaborators of a submission:
//! the wallet, the backend store, and notifications.

pub mod notifier;
pub mod store;
pub mod wallet;
