//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::command::ConfigArg;
use crate::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use crate::adapter::inbound::cli::{load_config, output};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: marketwright config validate -c {}",
        path.display()
    ));
    output::note("3. Run: marketwright form");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(arg: &ConfigArg) -> Result<()> {
    let config = load_config(arg)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": serde_json::to_value(&config)?,
        }));
        return Ok(());
    }

    output::section("Backend");
    output::field("API", display_or_unset(&config.api.url));

    output::section("Contract");
    output::field("Address", display_or_unset(&config.contract.address));
    output::field("Name", display_or_unset(&config.contract.name));
    output::field("Network", config.contract.network);

    output::section("Wallet");
    output::field("Bridge", &config.wallet.bridge_url);
    output::field("Confirm", config.wallet.confirm);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
///
/// Syntax errors are rendered with their location in the file. Empty
/// required settings are reported as warnings only.
pub fn execute_validate(arg: &ConfigArg) -> Result<()> {
    if let Some(path) = &arg.config {
        let src = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        if let Err(e) = toml::from_str::<Config>(&src) {
            let name = path.display().to_string();
            let report = miette::Report::new(ConfigDiagnostic::from_toml(&name, &src, &e));
            if !output::is_json() {
                eprintln!("{report:?}");
            }
            return Err(Error::Config(ConfigError::Parse(e)));
        }
    }

    let config = load_config(arg)?;
    let missing = config.missing_fields();

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "valid": true,
            "missing": missing,
        }));
        return Ok(());
    }

    output::success("Configuration is valid");
    for field in &missing {
        output::warning(&format!("{field} is not set; submissions will fail until it is"));
    }
    if !missing.is_empty() {
        output::hint("set it in the file or via API_URL / CONTRACT_ADDRESS / CONTRACT_NAME");
    }
    Ok(())
}

fn display_or_unset(value: &str) -> String {
    if value.trim().is_empty() {
        output::muted("(unset)")
    } else {
        value.to_string()
    }
}
