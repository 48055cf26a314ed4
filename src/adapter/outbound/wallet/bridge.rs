//! HTTP wallet bridge.
//!
//! Forwards contract calls to a wallet bridge (a local signer or browser
//! wallet relay) and waits for the user's decision. The bridge answers
//! `{"txId": "..."}` once the transaction is broadcast, or
//! `{"cancelled": true}` if the user rejected it.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::contract::ContractCall;
use crate::domain::id::TxId;
use crate::port::outbound::wallet::{WalletConnector, WalletOutcome};

/// Path of the contract-call endpoint, relative to the bridge URL.
pub const CONTRACT_CALL_PATH: &str = "/contract-call";

/// Wallet connector speaking to a bridge over HTTP.
#[derive(Debug, Clone)]
pub struct WalletBridge {
    client: Client,
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BridgeReply {
    #[serde(default)]
    tx_id: Option<String>,
    #[serde(default)]
    cancelled: bool,
    #[serde(default)]
    error: Option<String>,
}

impl BridgeReply {
    fn into_outcome(self) -> WalletOutcome {
        if self.cancelled {
            return WalletOutcome::Cancelled;
        }
        match (self.tx_id.filter(|id| !id.is_empty()), self.error) {
            (Some(tx_id), _) => WalletOutcome::Completed {
                tx_id: TxId::new(tx_id),
            },
            (None, Some(error)) => WalletOutcome::Failed { error },
            (None, None) => WalletOutcome::failed("wallet bridge reply had no txId"),
        }
    }
}

impl WalletBridge {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}{CONTRACT_CALL_PATH}",
            self.base_url.trim_end_matches('/')
        ))
    }

    async fn send(&self, call: &ContractCall) -> crate::error::Result<WalletOutcome> {
        let url = self.endpoint()?;
        debug!(url = %url, function = %call.function_name, "Forwarding contract call");

        let response = self.client.post(url).json(call).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<BridgeReply>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            return Ok(WalletOutcome::failed(format!(
                "wallet bridge returned {status}: {detail}"
            )));
        }

        let reply: BridgeReply = serde_json::from_str(&body)?;
        Ok(reply.into_outcome())
    }
}

#[async_trait]
impl WalletConnector for WalletBridge {
    fn name(&self) -> &'static str {
        "bridge"
    }

    async fn contract_call(&self, call: &ContractCall) -> WalletOutcome {
        self.send(call).await.unwrap_or_else(|e| {
            warn!(error = %e, "Wallet bridge request failed");
            WalletOutcome::failed(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> WalletOutcome {
        serde_json::from_str::<BridgeReply>(json)
            .unwrap()
            .into_outcome()
    }

    #[test]
    fn tx_id_reply_completes() {
        assert_eq!(
            reply(r#"{"txId":"0xabc"}"#),
            WalletOutcome::Completed {
                tx_id: TxId::new("0xabc")
            }
        );
    }

    #[test]
    fn cancelled_reply_wins_over_tx_id() {
        assert_eq!(
            reply(r#"{"cancelled":true,"txId":"0xabc"}"#),
            WalletOutcome::Cancelled
        );
    }

    #[test]
    fn error_or_empty_reply_fails() {
        assert_eq!(
            reply(r#"{"error":"insufficient balance"}"#),
            WalletOutcome::Failed {
                error: "insufficient balance".into()
            }
        );
        assert!(matches!(reply("{}"), WalletOutcome::Failed { .. }));
        assert!(matches!(reply(r#"{"txId":""}"#), WalletOutcome::Failed { .. }));
    }

    #[test]
    fn endpoint_joins_path() {
        let bridge = WalletBridge::new("http://127.0.0.1:4100/");
        assert_eq!(
            bridge.endpoint().unwrap().as_str(),
            "http://127.0.0.1:4100/contract-call"
        );
    }
}
