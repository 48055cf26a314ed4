//! Command-line interface definitions.
//!
//! Defines the CLI structure for marketwright using `clap`: one-shot market
//! creation, an interactive form, a no-network preview, and configuration
//! management.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::draft::MarketDraft;

/// Prediction market creation CLI
#[derive(Parser, Debug)]
#[command(name = "marketwright")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new market to the wallet and the backend
    Create(CreateArgs),

    /// Fill in and submit markets interactively
    Form(ConfigArg),

    /// Show the contract call and pool split for a draft without sending it
    Preview(PreviewArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `marketwright config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults and environment applied.
    Show(ConfigArg),
    /// Validate a configuration file.
    Validate(ConfigArg),
}

/// Market parameters shared by `create` and `preview`.
#[derive(Parser, Debug, Clone)]
pub struct DraftArgs {
    /// Market question
    #[arg(long, default_value = "")]
    pub question: String,

    /// Initial liquidity in whole tokens (min 1)
    #[arg(long, default_value = "1000")]
    pub liquidity: Decimal,

    /// Implied probability of YES, in percent (1-99)
    #[arg(long, default_value = "50")]
    pub yes_percentage: Decimal,

    /// Trading fee in percent (0-10)
    #[arg(long, default_value = "1")]
    pub fee_percentage: Decimal,
}

impl DraftArgs {
    /// Build a draft, clamping values into their ranges.
    #[must_use]
    pub fn to_draft(&self) -> MarketDraft {
        MarketDraft::new(
            self.question.clone(),
            self.liquidity,
            self.yes_percentage,
            self.fee_percentage,
        )
    }
}

/// Optional configuration path.
///
/// Without `--config`, the default file is used when it exists and the
/// environment alone otherwise.
#[derive(Parser, Debug, Clone, Default)]
pub struct ConfigArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `create`.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub draft: DraftArgs,

    #[command(flatten)]
    pub config: ConfigArg,

    /// Send the call to the wallet without asking for confirmation
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,
}

/// Arguments for `preview`.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub draft: DraftArgs,

    #[command(flatten)]
    pub config: ConfigArg,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the configuration file.
    #[arg(default_value_os_t = super::paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn create_parses_draft_flags() {
        let cli = Cli::try_parse_from([
            "marketwright",
            "create",
            "--question",
            "Will it rain?",
            "--liquidity",
            "2000",
            "--yes-percentage",
            "60",
            "--fee-percentage",
            "2",
            "--yes",
        ])
        .unwrap();

        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert!(args.assume_yes);
        let draft = args.draft.to_draft();
        assert_eq!(draft.question(), "Will it rain?");
        assert_eq!(draft.initial_liquidity(), dec!(2000));
        assert_eq!(draft.yes_percentage(), dec!(60));
        assert_eq!(draft.fee_percentage(), dec!(2));
    }

    #[test]
    fn create_defaults_match_form_defaults() {
        let cli = Cli::try_parse_from(["marketwright", "create"]).unwrap();
        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert!(!args.assume_yes);
        assert!(args.config.config.is_none());
        assert_eq!(args.draft.to_draft(), MarketDraft::default());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["marketwright", "preview", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
