mod support;

use marketwright::adapter::outbound::wallet::WalletBridge;
use marketwright::domain::contract::ContractCall;
use marketwright::domain::draft::MarketDraft;
use marketwright::domain::id::TxId;
use marketwright::port::outbound::wallet::{WalletConnector, WalletOutcome};
use marketwright::testkit::config::target;
use rust_decimal_macros::dec;
use serde_json::json;

use support::http_stub::{HttpStub, Reply};

fn call() -> ContractCall {
    let draft = MarketDraft::new("Will it rain?", dec!(2000), dec!(60), dec!(2));
    ContractCall::create_market(&target(), &draft).expect("valid call")
}

#[tokio::test]
async fn forwards_call_and_returns_tx_id() {
    let stub = HttpStub::start(vec![Reply::json(200, json!({ "txId": "0xfeed" }))]).await;
    let bridge = WalletBridge::new(stub.base_url());

    let outcome = bridge.contract_call(&call()).await;

    assert_eq!(
        outcome,
        WalletOutcome::Completed {
            tx_id: TxId::new("0xfeed"),
        }
    );
    let requests = stub.requests();
    assert_eq!(requests[0].path, "/contract-call");
    assert_eq!(
        requests[0].json(),
        json!({
            "network": "mainnet",
            "contractAddress": "SP2ABC",
            "contractName": "prediction-market",
            "functionName": "create-market",
            "functionArgs": [
                { "type": "uint", "value": "2000000000" },
                { "type": "uint", "value": "6000" },
                { "type": "uint", "value": "200" },
            ],
            "postConditionMode": "allow",
        })
    );
}

#[tokio::test]
async fn cancelled_reply_is_cancelled() {
    let stub = HttpStub::start(vec![Reply::json(200, json!({ "cancelled": true }))]).await;
    let bridge = WalletBridge::new(stub.base_url());

    assert_eq!(bridge.contract_call(&call()).await, WalletOutcome::Cancelled);
}

#[tokio::test]
async fn error_status_fails_with_detail() {
    let stub = HttpStub::start(vec![Reply::json(
        502,
        json!({ "error": "wallet locked" }),
    )])
    .await;
    let bridge = WalletBridge::new(stub.base_url());

    let WalletOutcome::Failed { error } = bridge.contract_call(&call()).await else {
        panic!("expected failure");
    };
    assert!(error.contains("502"), "{error}");
    assert!(error.contains("wallet locked"), "{error}");
}

#[tokio::test]
async fn unreachable_bridge_fails() {
    let stub = HttpStub::start(vec![Reply::Hangup]).await;
    let bridge = WalletBridge::new(stub.base_url());

    assert!(matches!(
        bridge.contract_call(&call()).await,
        WalletOutcome::Failed { .. }
    ));
}
