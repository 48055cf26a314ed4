//! REST client for the market backend.
//!
//! Implements [`MarketStore`] by posting records to `{base}/api/markets`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::record::MarketRecord;
use crate::error::PersistError;
use crate::port::outbound::store::MarketStore;

/// Path of the market collection, relative to the API base URL.
pub const MARKETS_PATH: &str = "/api/markets";

/// Backend REST client.
#[derive(Debug, Clone)]
pub struct HttpMarketStore {
    /// HTTP client for API requests.
    client: Client,
    /// Base URL as configured, without the markets path.
    base_url: String,
}

impl HttpMarketStore {
    /// Create a client for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing [`Client`].
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full URL of the markets endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Request`] if the configured base does not form
    /// a valid URL.
    pub fn endpoint(&self) -> Result<Url, PersistError> {
        let raw = format!("{}{MARKETS_PATH}", self.base_url.trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| PersistError::Request(format!("{e}: {raw}")))
    }
}

/// Error body shape commonly returned by the backend.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Message for a non-success status: the server's `message` if it sent one,
/// otherwise the status text.
fn server_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| status.as_str().to_owned())
        })
}

/// Split transport errors into "never sent" and "sent, nothing came back".
fn classify(error: reqwest::Error) -> PersistError {
    if error.is_builder() {
        PersistError::Request(error.to_string())
    } else {
        PersistError::NoResponse {
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl MarketStore for HttpMarketStore {
    async fn store(&self, record: &MarketRecord) -> Result<serde_json::Value, PersistError> {
        let url = self.endpoint()?;
        debug!(url = %url, tx_id = %record.tx_id(), "Posting market record");

        let response = self
            .client
            .post(url)
            .json(record)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        if !status.is_success() {
            return Err(PersistError::Server {
                status: status.as_u16(),
                message: server_message(status, &body),
            });
        }

        // The body is only logged; non-JSON replies are kept as text.
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }
}
