//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for user-facing surfaces.

pub mod console;

pub use console::ConsoleNotifier;
