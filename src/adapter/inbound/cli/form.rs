//! Interactive market creation form.
//!
//! A terminal rendition of the single-page form: edit fields, submit, reset,
//! repeat. Form state survives failed submissions so the same values can be
//! resubmitted.

use dialoguer::{theme::ColorfulTheme, Input, Select};
use rust_decimal::Decimal;

use crate::adapter::inbound::cli::command::ConfigArg;
use crate::adapter::inbound::cli::{init_logging, load_config, output};
use crate::application::form::MarketForm;
use crate::domain::draft::{
    FEE_PERCENTAGE_STEP, MAX_FEE_PERCENTAGE, MAX_YES_PERCENTAGE, MIN_FEE_PERCENTAGE,
    MIN_INITIAL_LIQUIDITY, MIN_YES_PERCENTAGE,
};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;

const ACTIONS: &[&str] = &[
    "Edit question",
    "Edit initial liquidity",
    "Edit yes percentage",
    "Edit fee percentage",
    "Create market",
    "Reset form",
    "Quit",
];

/// Run the interactive form until the user quits.
pub async fn execute(arg: &ConfigArg) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`marketwright form` is interactive; use `marketwright create` for scripted use"
                .to_string(),
        }
        .into());
    }

    let config = load_config(arg)?;
    init_logging(&config);
    let creator = bootstrap::build_market_creator(&config, false);

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Contract", creator.target().identifier());
    output::field("Network", creator.target().network);

    let theme = ColorfulTheme::default();
    let mut form = MarketForm::new();

    loop {
        print_draft(&form);
        println!();

        let action = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                let question: String = Input::with_theme(&theme)
                    .with_prompt("Market question")
                    .with_initial_text(form.draft().question())
                    .allow_empty(true)
                    .interact_text()?;
                form.set_question(question);
            }
            1 => {
                let prompt = format!("Initial liquidity (STX, min {MIN_INITIAL_LIQUIDITY})");
                let value = prompt_decimal(&theme, &prompt, form.draft().initial_liquidity())?;
                form.set_initial_liquidity(value);
            }
            2 => {
                let prompt =
                    format!("Yes percentage ({MIN_YES_PERCENTAGE}-{MAX_YES_PERCENTAGE})");
                let value = prompt_decimal(&theme, &prompt, form.draft().yes_percentage())?;
                form.set_yes_percentage(value);
            }
            3 => {
                let prompt = format!(
                    "Fee percentage ({MIN_FEE_PERCENTAGE}-{MAX_FEE_PERCENTAGE}, step {FEE_PERCENTAGE_STEP})"
                );
                let value = prompt_decimal(&theme, &prompt, form.draft().fee_percentage())?;
                form.set_fee_percentage(value);
            }
            4 => {
                let outcome = creator.create_market(&mut form).await;
                super::create::print_outcome(&form, &outcome);
            }
            5 => form.reset_form(),
            _ => break,
        }
    }

    Ok(())
}

fn prompt_decimal(theme: &ColorfulTheme, prompt: &str, current: Decimal) -> Result<Decimal> {
    let value: Decimal = Input::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(current.to_string())
        .interact_text()?;
    Ok(value)
}

/// Print the current form values.
pub(crate) fn print_draft(form: &MarketForm) {
    let draft = form.draft();
    output::section("Market");
    let question = if draft.question().is_empty() {
        output::muted("(empty)")
    } else {
        draft.question().to_string()
    };
    output::field("Question", question);
    output::field("Liquidity", format!("{} STX", draft.initial_liquidity()));
    output::field("Yes", format!("{}%", draft.yes_percentage()));
    output::field("Fee", format!("{}%", draft.fee_percentage()));
    if let Some(tx_id) = form.tx_id() {
        output::field("Last tx", output::highlight(tx_id));
    }
}
