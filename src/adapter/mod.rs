//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the command-line interface
//! - [`outbound`] - Driven side: wallet, backend, notifications

pub mod inbound;
pub mod outbound;
