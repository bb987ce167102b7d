//! `exoview` binary entry point.

use clap::Parser;
use exoview_cli::cli::{Cli, Command};
use exoview_cli::config::ExoviewConfig;
use exoview_cli::config_handlers::handle_config_command;
use exoview_cli::logging::{LogTarget, init_logging};
use exoview_cli::{commands, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.resolved_command();

    let interactive = command == Command::Browse;
    init_logging(LogTarget::select(cli.log_file.as_deref(), interactive))?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "exoview starting");

    let config_path = cli.config.as_deref();

    match command {
        Command::Config { action } => {
            handle_config_command(config_path, action, &mut std::io::stdout().lock())?;
        }
        Command::List {
            search,
            method,
            json,
        } => {
            let config = ExoviewConfig::load(config_path)?.with_endpoint(cli.endpoint);
            let mut stdout = std::io::stdout();
            commands::run_list(&config, &search, &method, json, &mut stdout).await?;
        }
        Command::Browse => {
            let config = ExoviewConfig::load(config_path)?.with_endpoint(cli.endpoint);
            terminal::run(&config).await?;
        }
    }

    Ok(())
}
