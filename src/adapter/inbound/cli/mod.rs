//! CLI module graph and dispatch.

pub mod command;
pub mod compare;
pub mod market;
pub mod output;
pub mod report;
pub mod settings;

use command::{Cli, Commands, ConfigCommand};

use crate::config::Config;
use crate::error::Result;

/// Run the parsed command line against a loaded configuration.
pub async fn execute(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Report(args) => report::execute(config, args).await,
        Commands::Market(args) => market::execute(config, args).await,
        Commands::Compare(args) => compare::execute(config, args).await,
        Commands::Config(ConfigCommand::Show) => {
            settings::execute_show(config);
            Ok(())
        }
        Commands::Config(ConfigCommand::Validate) => settings::execute_validate(&cli.config),
    }
}
