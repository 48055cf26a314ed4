//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`wallet`] - [`ScriptedWallet`](wallet::ScriptedWallet), a wallet that
//!   replies with a fixed outcome and records the calls it received.
//! - [`store`] - [`RecordingStore`](store::RecordingStore), an in-memory
//!   backend with a scripted reply.
//! - [`notifier`] - [`RecordingNotifier`](notifier::RecordingNotifier).
//! - [`journal`] - A shared, ordered log the doubles can append to, for
//!   asserting the order of side effects across collaborators.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod journal;
pub mod notifier;
pub mod store;
pub mod wallet;
