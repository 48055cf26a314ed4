//! CLI module graph and command dispatch.

pub mod command;
pub mod config;
pub mod create;
pub mod diagnostic;
pub mod form;
pub mod output;
pub mod paths;
pub mod preview;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

use command::{Cli, Commands, ConfigArg, ConfigCommand};

/// Load configuration for a command.
///
/// An explicit `--config` path must exist. Without one, the default file
/// is used when present and the environment alone otherwise.
#[allow(clippy::result_large_err)]
pub fn load_config(arg: &ConfigArg) -> Result<Config> {
    match &arg.config {
        Some(path) => Config::resolve(path, true),
        None => Config::resolve(&paths::default_config(), false),
    }
}

/// Install the tracing subscriber. `-v` raises the level to debug.
pub fn init_logging(config: &Config) {
    if output::verbosity() > 0 {
        let mut config = config.clone();
        config.logging.level = "debug".into();
        config.init_logging();
    } else {
        config.init_logging();
    }
}

/// Run a parsed command line and return the process exit code.
///
/// # Errors
///
/// Returns an error when configuration cannot be loaded or a terminal
/// interaction fails. Submission failures are reported through
/// notifications and the exit code instead.
pub async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Create(args) => {
            let outcome = create::execute(&args).await?;
            Ok(if outcome.is_ok() { 0 } else { 1 })
        }
        Commands::Form(arg) => {
            form::execute(&arg).await?;
            Ok(0)
        }
        Commands::Preview(args) => {
            preview::execute(&args)?;
            Ok(0)
        }
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(&args.path, args.force)?;
            Ok(0)
        }
        Commands::Config(ConfigCommand::Show(arg)) => {
            config::execute_show(&arg)?;
            Ok(0)
        }
        Commands::Config(ConfigCommand::Validate(arg)) => {
            config::execute_validate(&arg)?;
            Ok(0)
        }
    }
}
