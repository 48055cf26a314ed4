//! Marketwright - prediction market creation.
//!
//! Takes a market draft (question, initial liquidity, YES percentage, fee),
//! turns it into a `create-market` contract call for the user's wallet, and
//! records the created market with the backend once the wallet returns a
//! transaction id. Every step reports to the user through notifications.
//!
//! # Architecture
//!
//! - [`domain`] - Draft, contract call, market record and notification types
//! - [`port`] - Traits for the wallet, the backend store and notifiers
//! - [`application`] - The form state and the submission flow
//! - [`adapter`] - CLI, HTTP backend, wallet bridge and console notifier
//! - [`infrastructure`] - Configuration loading and wiring
//!
//! # Example
//!
//! ```no_run
//! use marketwright::infrastructure::bootstrap;
//! use marketwright::infrastructure::config::settings::Config;
//! use marketwright::application::form::MarketForm;
//!
//! # async fn run() -> marketwright::error::Result<()> {
//! let config = Config::from_env()?;
//! let creator = bootstrap::build_market_creator(&config, true);
//! let mut form = MarketForm::new();
//! form.set_question("Will it rain in Lisbon tomorrow?");
//! let outcome = creator.create_market(&mut form).await;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
