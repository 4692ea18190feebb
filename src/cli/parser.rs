//! CLI argument parsing with clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use super::validation::{parse_environment, parse_log_level};
use crate::config::Environment;

/// Superuser-only user administration service
#[derive(Parser, Debug)]
#[command(name = "useradmin-rs")]
#[command(about = "Superuser-only HTTP endpoints for creating and deleting users")]
#[command(long_about = "
useradmin-rs serves two administrative endpoints, POST /useradd/{username} and
GET /userdel/{username}, that only the \"neo4j\" superuser may call. Every other
caller receives 404 Not Found.

EXAMPLES:
    # Start the server with default configuration
    useradmin-rs serve

    # Start server on custom host and port
    useradmin-rs serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    useradmin-rs --config /path/to/config.toml serve

    # Check configuration without starting server
    useradmin-rs serve --dry-run

    # Write the OpenAPI document
    useradmin-rs openapi --output openapi.json
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this TOML file instead of the layered files in the config directory.
    /// USERADMIN_* environment variables still apply on top of it.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// One of development (dev), test, staging (stage) or production (prod).
    /// Selects which {environment}.toml is layered over default.toml,
    /// taking precedence over USERADMIN_APP_ENV.
    #[arg(short, long, value_name = "ENV", value_parser = parse_environment)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   useradmin-rs serve                           # Start with defaults
    ///   useradmin-rs serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   useradmin-rs serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override: error, warn, info, debug or trace
        ///
        /// Takes precedence over the configuration files and --verbose/--quiet.
        #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
        log_level: Option<Level>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the OpenAPI document for the admin endpoints
    ///
    /// The document is not served over HTTP; use this command to publish it.
    Openapi {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Checks argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        if let Some(Commands::Openapi { .. }) = self.command {
            if self.config.is_some() || self.env.is_some() {
                return Err("--config and --env have no effect on the openapi command".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["useradmin-rs", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["useradmin-rs", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["useradmin-rs"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["useradmin-rs", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_arguments() {
        let cli = Cli::try_parse_from([
            "useradmin-rs",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "WARN",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Serve {
                host,
                port,
                log_level,
                dry_run,
            }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
                assert_eq!(log_level, Some(Level::WARN));
                assert!(dry_run);
            }
            other => panic!("Expected serve command, got {:?}", other),
        }
    }

    #[test]
    fn test_serve_rejects_port_zero() {
        assert!(Cli::try_parse_from(["useradmin-rs", "serve", "--port", "0"]).is_err());
    }

    #[test]
    fn test_env_aliases() {
        let cli = Cli::try_parse_from(["useradmin-rs", "--env", "prod"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Production));

        let cli = Cli::try_parse_from(["useradmin-rs", "-e", "Stage"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Staging));

        assert!(Cli::try_parse_from(["useradmin-rs", "--env", "qa"]).is_err());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        assert!(Cli::try_parse_from(["useradmin-rs", "serve", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_openapi_output() {
        let cli = Cli::try_parse_from(["useradmin-rs", "openapi", "-o", "api.json"]).unwrap();
        match cli.command {
            Some(Commands::Openapi { output }) => {
                assert_eq!(output, Some(PathBuf::from("api.json")));
            }
            other => panic!("Expected openapi command, got {:?}", other),
        }
    }

    #[test]
    fn test_openapi_rejects_env_override() {
        let cli = Cli::try_parse_from(["useradmin-rs", "--env", "test", "openapi"]).unwrap();
        assert!(cli.validate().is_err());
    }
}
