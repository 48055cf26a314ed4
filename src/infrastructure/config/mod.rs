//! Infrastructure configuration modules.

pub mod api;
pub mod contract;
pub mod logging;
pub mod settings;
pub mod wallet;
