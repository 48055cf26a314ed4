//! Wallet connection settings.

use serde::{Deserialize, Serialize};

/// Default address of a locally running wallet bridge.
pub const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:4100";

/// How contract calls reach the user's wallet.
///
/// The bridge URL can be overridden with `WALLET_BRIDGE_URL`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct WalletConfig {
    /// Base URL of the wallet bridge.
    #[serde(default = "default_bridge_url")]
    pub bridge_url: String,
    /// Ask for confirmation in the terminal before forwarding a call.
    #[serde(default = "default_confirm")]
    pub confirm: bool,
}

fn default_bridge_url() -> String {
    DEFAULT_BRIDGE_URL.to_string()
}

const fn default_confirm() -> bool {
    true
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            bridge_url: default_bridge_url(),
            confirm: default_confirm(),
        }
    }
}
