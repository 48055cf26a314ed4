//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement market creation.

pub mod form;
pub mod persistence;
pub mod submission;

pub use form::MarketForm;
pub use persistence::MarketPersistence;
pub use submission::{MarketCreator, SubmissionOutcome};
