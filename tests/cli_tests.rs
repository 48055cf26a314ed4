//! CLI integration tests.

mod support;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::TempDir;

use support::http_stub::{HttpStub, Reply};

/// Command with a private home directory and no inherited overrides.
fn marketwright(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("marketwright");
    cmd.env("HOME", home.path())
        .env_remove("API_URL")
        .env_remove("CONTRACT_ADDRESS")
        .env_remove("CONTRACT_NAME")
        .env_remove("WALLET_BRIDGE_URL")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never");
    cmd
}

fn with_services(cmd: &mut Command, api: &HttpStub, wallet: &HttpStub) {
    cmd.env("API_URL", api.base_url())
        .env("CONTRACT_ADDRESS", "SP2ABC")
        .env("CONTRACT_NAME", "prediction-market")
        .env("WALLET_BRIDGE_URL", wallet.base_url());
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().expect("temp dir");
    marketwright(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("form"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn create_without_question_fails() {
    let home = TempDir::new().expect("temp dir");
    marketwright(&home)
        .args(["create", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please enter a market question"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_reports_transaction_and_storage() {
    let home = TempDir::new().expect("temp dir");
    let api = HttpStub::start(vec![Reply::json(201, json!({ "id": 1 }))]).await;
    let wallet = HttpStub::start(vec![Reply::json(200, json!({ "txId": "0xfeed" }))]).await;

    let mut cmd = marketwright(&home);
    with_services(&mut cmd, &api, &wallet);
    cmd.args([
        "create",
        "--question",
        "Will it snow in Paris?",
        "--liquidity",
        "2000",
        "--yes-percentage",
        "60",
        "--fee-percentage",
        "2",
        "--yes",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("0xfeed"))
    .stdout(predicate::str::contains(
        "Market created successfully. It will be visible after admin approval.",
    ))
    .stdout(predicate::str::contains(
        "Market created and stored in database",
    ));

    let stored = api.requests();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].json()["txId"], "0xfeed");
    assert_eq!(stored[0].json()["visible"], false);
    let call = wallet.requests();
    assert_eq!(call[0].json()["functionArgs"][0]["value"], "2000000000");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_still_succeeds_when_backend_rejects() {
    let home = TempDir::new().expect("temp dir");
    let api = HttpStub::start(vec![Reply::json(500, json!({ "message": "db down" }))]).await;
    let wallet = HttpStub::start(vec![Reply::json(200, json!({ "txId": "0xfeed" }))]).await;

    let mut cmd = marketwright(&home);
    with_services(&mut cmd, &api, &wallet);
    cmd.args(["create", "--question", "Will it snow?", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Market created on blockchain but failed to store in database - db down",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_cancelled_in_wallet_exits_zero() {
    let home = TempDir::new().expect("temp dir");
    let api = HttpStub::start(vec![]).await;
    let wallet = HttpStub::start(vec![Reply::json(200, json!({ "cancelled": true }))]).await;

    let mut cmd = marketwright(&home);
    with_services(&mut cmd, &api, &wallet);
    cmd.args(["create", "--question", "Will it snow?", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Market creation was cancelled"));

    assert!(api.requests().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_wallet_failure_exits_nonzero() {
    let home = TempDir::new().expect("temp dir");
    let api = HttpStub::start(vec![]).await;
    let wallet = HttpStub::start(vec![Reply::json(502, json!({ "error": "locked" }))]).await;

    let mut cmd = marketwright(&home);
    with_services(&mut cmd, &api, &wallet);
    cmd.args(["create", "--question", "Will it snow?", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create market"));
}

#[test]
fn preview_json_shows_call_and_pools() {
    let home = TempDir::new().expect("temp dir");
    let output = marketwright(&home)
        .env("CONTRACT_ADDRESS", "SP2ABC")
        .env("CONTRACT_NAME", "prediction-market")
        .args([
            "--json",
            "preview",
            "--liquidity",
            "2000",
            "--yes-percentage",
            "60",
            "--fee-percentage",
            "2",
        ])
        .output()
        .expect("run marketwright");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("JSON output");

    assert_eq!(value["call"]["contractAddress"], "SP2ABC");
    assert_eq!(value["call"]["functionName"], "create-market");
    let args: Vec<&str> = value["call"]["functionArgs"]
        .as_array()
        .expect("args")
        .iter()
        .filter_map(|a| a["value"].as_str())
        .collect();
    assert_eq!(args, vec!["2000000000", "6000", "200"]);

    let pool = |side: &str| -> Decimal {
        value["pools"][side]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("pool value")
    };
    assert_eq!(pool("yes"), Decimal::from(1200));
    assert_eq!(pool("no"), Decimal::from(800));
}

#[test]
fn config_init_then_validate() {
    let home = TempDir::new().expect("temp dir");
    let path = home.path().join("marketwright.toml");

    marketwright(&home)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    marketwright(&home)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    marketwright(&home)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_rejects_malformed_toml() {
    let home = TempDir::new().expect("temp dir");
    let path = home.path().join("broken.toml");
    fs::write(&path, "[contract\nname = \"x\"\n").expect("write config");

    marketwright(&home)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn config_validate_warns_about_missing_settings() {
    let home = TempDir::new().expect("temp dir");
    marketwright(&home)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contract.address is not set"));
}

#[test]
fn config_show_json_reflects_environment() {
    let home = TempDir::new().expect("temp dir");
    let output = marketwright(&home)
        .env("CONTRACT_NAME", "markets-v2")
        .args(["--json", "config", "show"])
        .output()
        .expect("run marketwright");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output");
    assert_eq!(value["config"]["contract"]["name"], "markets-v2");
    assert_eq!(value["config"]["wallet"]["confirm"], true);
}
