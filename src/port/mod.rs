//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Wallet  │            │   Market    │              │ Notifier  │
//! │ Adapter │            │   Store     │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`WalletConnector`] - Contract-call execution through a user wallet
//! - [`MarketStore`] - Backend persistence of created markets
//! - [`Notifier`] - User-facing notifications

pub mod outbound;

pub use outbound::notifier::{LogNotifier, Notifier, NotifierRegistry, NullNotifier};
pub use outbound::store::MarketStore;
pub use outbound::wallet::{WalletConnector, WalletOutcome};
