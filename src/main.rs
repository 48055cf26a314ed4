use clap::Parser;
use marketwright::adapter::inbound::cli::command::{Cli, ColorChoice};
use marketwright::adapter::inbound::cli::output::{self, OutputConfig};
use marketwright::adapter::inbound::cli::run;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    }
}
