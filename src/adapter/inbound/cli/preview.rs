//! Handler for the `preview` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::PreviewArgs;
use crate::adapter::inbound::cli::{load_config, output};
use crate::domain::contract::ContractCall;
use crate::error::Result;

#[derive(Tabled)]
struct ArgumentRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Argument")]
    name: &'static str,
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Clarity")]
    value: String,
}

const ARGUMENT_NAMES: [&str; 3] = ["initial-liquidity", "yes-percentage", "fee-percentage"];

/// Execute the preview command. Nothing is sent to the wallet or backend.
pub fn execute(args: &PreviewArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let draft = args.draft.to_draft();
    let target = config.contract.target();
    let call = ContractCall::create_market(&target, &draft)?;
    let (yes_pool, no_pool) = draft.pools();

    if output::is_json() {
        output::json_output(json!({
            "command": "preview",
            "call": serde_json::to_value(&call)?,
            "pools": {
                "yes": yes_pool.to_string(),
                "no": no_pool.to_string(),
            },
        }));
        return Ok(());
    }

    output::section("Contract Call");
    let contract = if target.contract_address.is_empty() || target.contract_name.is_empty() {
        output::muted("(unset)")
    } else {
        target.identifier()
    };
    output::field("Contract", contract);
    output::field("Function", &call.function_name);
    output::field("Network", call.network);

    let inputs = [
        format!("{} STX", draft.initial_liquidity()),
        format!("{}%", draft.yes_percentage()),
        format!("{}%", draft.fee_percentage()),
    ];
    let rows: Vec<ArgumentRow> = call
        .function_args
        .iter()
        .zip(ARGUMENT_NAMES)
        .zip(inputs)
        .enumerate()
        .map(|(i, ((value, name), input))| ArgumentRow {
            position: i + 1,
            name,
            input,
            value: value.to_string(),
        })
        .collect();
    println!();
    output::lines(&Table::new(rows).to_string());

    output::section("Pools");
    output::field("Yes", format!("{yes_pool} STX"));
    output::field("No", format!("{no_pool} STX"));

    if draft.question().trim().is_empty() {
        output::hint("add --question before running `marketwright create`");
    }
    Ok(())
}
