//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! (`API_URL`, `CONTRACT_ADDRESS`, `CONTRACT_NAME`, `WALLET_BRIDGE_URL`).
//! Without a file, the environment alone is used.
//!
//! # Example
//!
//! ```no_run
//! use marketwright::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use super::api::ApiConfig;
use super::contract::ContractConfig;
use super::logging::{LoggingConfig, LOG_FORMATS};
use super::wallet::WalletConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`ApiConfig::url`].
pub const ENV_API_URL: &str = "API_URL";
/// Environment variable overriding [`ContractConfig::address`].
pub const ENV_CONTRACT_ADDRESS: &str = "CONTRACT_ADDRESS";
/// Environment variable overriding [`ContractConfig::name`].
pub const ENV_CONTRACT_NAME: &str = "CONTRACT_NAME";
/// Environment variable overriding [`WalletConfig::bridge_url`].
pub const ENV_WALLET_BRIDGE_URL: &str = "WALLET_BRIDGE_URL";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`], parse directly with
/// [`Config::parse_toml`], or build from the environment with
/// [`Config::from_env`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Backend API that stores created markets.
    #[serde(default)]
    pub api: ApiConfig,

    /// Market contract receiving `create-market` calls.
    #[serde(default)]
    pub contract: ContractConfig,

    /// Wallet bridge settings.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with(content, |key| std::env::var(key).ok())
    }

    /// Like [`Config::parse_toml`], reading overrides through `lookup`
    /// instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Build configuration from defaults and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an overridden value fails validation.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to [`Config::from_env`].
    ///
    /// An explicitly requested path that does not exist is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn resolve(path: &Path, explicit: bool) -> Result<Self> {
        if path.exists() || explicit {
            Self::load(path)
        } else {
            Self::from_env()
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api.url = url;
        }
        if let Some(address) = non_empty(ENV_CONTRACT_ADDRESS) {
            self.contract.address = address;
        }
        if let Some(name) = non_empty(ENV_CONTRACT_NAME) {
            self.contract.name = name;
        }
        if let Some(url) = non_empty(ENV_WALLET_BRIDGE_URL) {
            self.wallet.bridge_url = url;
        }
    }

    /// Validate configuration values.
    ///
    /// Only malformed values are rejected. Empty API or contract fields are
    /// allowed here; see [`Config::missing_fields`].
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if !self.api.url.is_empty() {
            Url::parse(&self.api.url).map_err(|e| ConfigError::InvalidValue {
                field: "api.url",
                reason: e.to_string(),
            })?;
        }
        if self.wallet.bridge_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "wallet.bridge_url",
            }
            .into());
        }
        Url::parse(&self.wallet.bridge_url).map_err(|e| ConfigError::InvalidValue {
            field: "wallet.bridge_url",
            reason: e.to_string(),
        })?;
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of: {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }

    /// Settings a submission needs that are still empty.
    ///
    /// Loading does not fail on these; a submission with them missing fails
    /// downstream at the wallet or the backend.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api.url.trim().is_empty() {
            missing.push("api.url");
        }
        if self.contract.address.trim().is_empty() {
            missing.push("contract.address");
        }
        if self.contract.name.trim().is_empty() {
            missing.push("contract.name");
        }
        missing
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
