//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use reqwest::Client;
use tracing::{info, warn};

use crate::adapter::outbound::backend::HttpMarketStore;
use crate::adapter::outbound::notifier::ConsoleNotifier;
use crate::adapter::outbound::wallet::{
    Approve, AutoApprove, ConfirmingWallet, TerminalApprover, WalletBridge,
};
use crate::application::submission::MarketCreator;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::notifier::{LogNotifier, Notifier, NotifierRegistry};
use crate::port::outbound::store::MarketStore;
use crate::port::outbound::wallet::WalletConnector;

/// Build notifier registry: the terminal plus the log.
pub(crate) fn build_notifier_registry() -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(ConsoleNotifier));
    registry.register(Box::new(LogNotifier));
    registry
}

/// Build the wallet connector from configuration.
///
/// With `confirm` enabled and no `auto_approve`, each call is shown on the
/// terminal and must be approved before it reaches the bridge.
pub(crate) fn build_wallet(
    config: &Config,
    client: Client,
    auto_approve: bool,
) -> Arc<dyn WalletConnector> {
    let bridge: Arc<dyn WalletConnector> =
        Arc::new(WalletBridge::with_client(client, &config.wallet.bridge_url));
    let approver: Arc<dyn Approve> = if auto_approve || !config.wallet.confirm {
        Arc::new(AutoApprove)
    } else {
        Arc::new(TerminalApprover)
    };
    Arc::new(ConfirmingWallet::new(bridge, approver))
}

/// Build the market creator for a configuration.
pub fn build_market_creator(config: &Config, auto_approve: bool) -> MarketCreator {
    for field in config.missing_fields() {
        warn!(field, "Configuration value is empty; submissions will fail downstream");
    }

    let client = Client::new();
    let wallet = build_wallet(config, client.clone(), auto_approve);
    let store: Arc<dyn MarketStore> =
        Arc::new(HttpMarketStore::with_client(client, &config.api.url));
    let notifier: Arc<dyn Notifier> = Arc::new(build_notifier_registry());

    info!(
        contract = %config.contract.target().identifier(),
        network = %config.contract.network,
        api = %config.api.url,
        "Market creator ready"
    );

    MarketCreator::new(config.contract.target(), wallet, store, notifier)
}
