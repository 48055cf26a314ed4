//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use crate::domain::contract::{ContractTarget, Network};
use crate::infrastructure::config::api::ApiConfig;
use crate::infrastructure::config::contract::ContractConfig;
use crate::infrastructure::config::settings::Config;

/// Contract target used by submission tests.
pub fn target() -> ContractTarget {
    ContractTarget::new(Network::Mainnet, "SP2ABC", "prediction-market")
}

/// Full config pointing the backend at `api_url`.
pub fn config(api_url: &str) -> Config {
    Config {
        api: ApiConfig {
            url: api_url.to_string(),
        },
        contract: ContractConfig {
            address: "SP2ABC".to_string(),
            name: "prediction-market".to_string(),
            network: Network::Mainnet,
        },
        ..Config::default()
    }
}
