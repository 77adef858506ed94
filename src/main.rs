use std::process::ExitCode;

use betline_report::adapter::inbound::cli::command::Cli;
use betline_report::adapter::inbound::cli::{self, output};
use betline_report::config::Config;
use clap::Parser;
use tokio::signal;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();
    output::configure(output::OutputConfig::new(args.json, args.quiet));

    let config = match Config::load_or_default(&args.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            return ExitCode::FAILURE;
        }
    };

    config.logging.with_verbosity(args.verbose).init();
    debug!(config = %args.config.display(), "Configuration loaded");

    tokio::select! {
        result = cli::execute(&args, &config) => {
            if let Err(e) = result {
                output::error(&e.to_string());
                return ExitCode::FAILURE;
            }
        }
        _ = signal::ctrl_c() => {
            info!("Interrupted");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
