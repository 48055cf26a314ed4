//! Market backend adapter (REST).

pub mod client;

pub use client::HttpMarketStore;
