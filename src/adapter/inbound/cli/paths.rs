//! Path utilities for marketwright.
//!
//! Configuration lives under `~/.marketwright/config.toml`.

use std::path::PathBuf;

/// Returns the marketwright home directory (`~/.marketwright/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".marketwright")
}

/// Returns the default config file path (`~/.marketwright/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
