//! Backend API settings.

use serde::{Deserialize, Serialize};

/// Backend REST API that stores created markets.
///
/// The URL can be overridden with `API_URL`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL; markets are posted to `{url}/api/markets`.
    #[serde(default)]
    pub url: String,
}
