//! Command executor for dispatching CLI commands

use super::handlers::{OpenapiCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use super::{init_logger_from_settings, load_and_merge_config};

/// Execute the parsed CLI command
///
/// `openapi` needs no configuration. `serve` (the default) loads and merges
/// configuration first, and only a real server start installs the logger.
pub async fn execute_command(cli: &Cli) -> anyhow::Result<()> {
    cli.validate().map_err(anyhow::Error::msg)?;

    match &cli.command {
        Some(Commands::Openapi { output }) => OpenapiCommandHandler::new(output.clone()).execute(),
        Some(Commands::Serve { dry_run: true, .. }) => {
            let settings = load_and_merge_config(cli)?;
            ServeCommandHandler::new(settings).execute(true).await
        }
        Some(Commands::Serve { .. }) | None => {
            let settings = load_and_merge_config(cli)?;
            init_logger_from_settings(&settings)?;
            ServeCommandHandler::new(settings).execute(false).await
        }
    }
}
