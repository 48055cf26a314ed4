//! Handler for the `create` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::CreateArgs;
use crate::adapter::inbound::cli::{init_logging, load_config, output};
use crate::application::form::MarketForm;
use crate::application::submission::SubmissionOutcome;
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Execute the create command.
pub async fn execute(args: &CreateArgs) -> Result<SubmissionOutcome> {
    let config = load_config(&args.config)?;
    init_logging(&config);

    let creator = bootstrap::build_market_creator(&config, args.assume_yes);
    let mut form = MarketForm::with_draft(args.draft.to_draft());

    output::header(env!("CARGO_PKG_VERSION"));
    super::form::print_draft(&form);

    // The spinner would redraw over an approval prompt.
    let prompting = config.wallet.confirm && !args.assume_yes;
    let spinner = if prompting {
        indicatif::ProgressBar::hidden()
    } else {
        output::spinner("Submitting")
    };
    let outcome = creator.create_market(&mut form).await;
    output::finish_spinner(&spinner);

    print_outcome(&form, &outcome);
    Ok(outcome)
}

/// Print the final outcome line; notifications have already been shown.
pub(crate) fn print_outcome(form: &MarketForm, outcome: &SubmissionOutcome) {
    if output::is_json() {
        let payload = match outcome {
            SubmissionOutcome::Rejected => json!({ "status": "rejected" }),
            SubmissionOutcome::Created { tx_id, stored } => {
                json!({ "status": "created", "tx_id": tx_id, "stored": stored })
            }
            SubmissionOutcome::Cancelled => json!({ "status": "cancelled" }),
            SubmissionOutcome::Failed { error } => json!({ "status": "failed", "error": error }),
        };
        output::json_output(json!({ "command": "create", "outcome": payload }));
        return;
    }

    if let Some(tx_id) = form.tx_id() {
        output::field("Transaction ID", output::highlight(tx_id));
    }
}
