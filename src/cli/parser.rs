//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// In-memory usuarios API with Swagger documentation
#[derive(Parser, Debug)]
#[command(name = "usuarios-api")]
#[command(about = "In-memory usuarios API with Swagger documentation")]
#[command(long_about = "
usuarios-api serves a small in-memory collection of usuarios over HTTP,
together with a read-only catalogue of rutas and an OpenAPI document
browsable through Swagger UI.

EXAMPLES:
    # Start the server with default configuration
    usuarios-api serve

    # Start server on custom host and port
    usuarios-api serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    usuarios-api --config /path/to/config.toml serve

    # Run in production mode with quiet logging
    usuarios-api --env production --quiet serve

    # Check configuration without starting server
    usuarios-api serve --dry-run
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute, `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this single TOML file instead of the layered `config/` directory.
    /// USUARIOS_* environment variables still apply on top of it.
    ///
    /// Example: --config /etc/usuarios-api/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects the `{environment}.toml` layer instead of USUARIOS_APP_ENV.
    ///
    /// Available values: development (dev), production (prod), test
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   usuarios-api serve                           # Start with defaults
    ///   usuarios-api serve --host 0.0.0.0 --port 80  # Bind to all interfaces on port 80
    ///   usuarios-api serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections
        /// from any interface.
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Takes precedence over the configuration files and the global
        /// --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        ///
        /// Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "production", alias = "prod")]
    Production,
    #[value(name = "test")]
    Test,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// Checks argument combinations clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }
        Ok(())
    }

    /// True when the log level comes from the command line, in which case a
    /// configuration reload must not change it.
    pub fn pins_log_level(&self) -> bool {
        self.verbose
            || self.quiet
            || matches!(
                self.command,
                Some(Commands::Serve {
                    log_level: Some(_),
                    ..
                })
            )
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self.command, Some(Commands::Serve { dry_run: true, .. }))
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Production => crate::config::Environment::Production,
            Environment::Test => crate::config::Environment::Test,
        }
    }
}
