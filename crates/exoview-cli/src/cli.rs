//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Exoview - browse the NASA Exoplanet Archive from a terminal
#[derive(Parser, Debug)]
#[command(name = "exoview", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "EXOVIEW_CONFIG")]
    pub config: Option<String>,

    /// Override the archive TAP endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive browser (default)
    Browse,

    /// Fetch once, filter, and print matching planets
    List {
        /// Case-insensitive substring of the planet name
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact discovery method ("" or "all" for every method)
        #[arg(short, long, default_value = "")]
        method: String,

        /// Print cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration file management
    Config {
        /// Action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a value by dotted key, e.g. `archive.table`
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default config file
    Init {
        /// Target file (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// The subcommand to run, `browse` when none was given.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Browse)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::try_parse_from(["exoview"]).unwrap();
        assert_eq!(cli.resolved_command(), Command::Browse);
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "exoview",
            "--endpoint",
            "http://localhost/TAP/sync",
            "list",
            "--search",
            "kepler",
            "--method",
            "Transit",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost/TAP/sync"));
        assert_eq!(
            cli.resolved_command(),
            Command::List {
                search: "kepler".into(),
                method: "Transit".into(),
                json: true,
            }
        );
    }

    #[test]
    fn test_config_init_arguments() {
        let cli = Cli::try_parse_from(["exoview", "config", "init", "--force"]).unwrap();
        assert_eq!(
            cli.resolved_command(),
            Command::Config {
                action: ConfigAction::Init {
                    file: None,
                    force: true
                }
            }
        );
    }
}
