//! Market contract settings.

use serde::{Deserialize, Serialize};

use crate::domain::contract::{ContractTarget, Network};

/// The deployed market contract.
///
/// Address and name can be overridden with `CONTRACT_ADDRESS` and
/// `CONTRACT_NAME`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContractConfig {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub network: Network,
}

impl ContractConfig {
    /// The contract target handed to the submission flow.
    #[must_use]
    pub fn target(&self) -> ContractTarget {
        ContractTarget::new(self.network, &self.address, &self.name)
    }
}
