//! Command executor for dispatching CLI commands
//!
//! Loads configuration, sets up logging and runs the selected command.

use anyhow::Context;

use super::handlers::ServeCommandHandler;
use super::parser::Cli;
use super::{init_logger_from_settings, load_and_merge_config};

/// Execute the parsed command line.
///
/// `serve` is the default command. A dry run only validates and reports the
/// configuration, so it never installs the global logger.
///
/// # Errors
/// Returns invalid argument combinations, configuration and logger errors,
/// and server startup failures.
pub async fn execute_command(cli: &Cli) -> anyhow::Result<()> {
    cli.validate().map_err(anyhow::Error::msg)?;

    let (settings, loader) = load_and_merge_config(cli)?;
    let handler = ServeCommandHandler::new(settings);

    if cli.is_dry_run() {
        return handler.validate_only();
    }

    let log_handle = init_logger_from_settings(handler.config())?;
    tracing::debug!(
        pinned_level = cli.pins_log_level(),
        "Logger initialized"
    );

    // A level fixed on the command line survives configuration reloads
    let loader = loader.filter(|_| !cli.pins_log_level());

    handler
        .run(log_handle, loader)
        .await
        .context("Server terminated with an error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[tokio::test]
    async fn test_execute_serve_dry_run_with_config_file() {
        let _guard = crate::config::loader::ENV_MUTEX
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usuarios.toml");
        std::fs::write(&path, "[server]\nport = 4200\n").unwrap();

        let cli = Cli::try_parse_from([
            "usuarios-api",
            "--config",
            path.to_str().unwrap(),
            "serve",
            "--dry-run",
        ])
        .unwrap();

        assert!(execute_command(&cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_dry_run_reports_invalid_config() {
        let _guard = crate::config::loader::ENV_MUTEX
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usuarios.toml");
        std::fs::write(&path, "[logger]\nlevel = \"loud\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "usuarios-api",
            "--config",
            path.to_str().unwrap(),
            "serve",
            "--dry-run",
        ])
        .unwrap();

        let err = execute_command(&cli).await.unwrap_err();
        assert!(format!("{:#}", err).contains("logger.level"));
    }

    #[tokio::test]
    async fn test_execute_rejects_conflicting_flags() {
        let cli = Cli {
            command: None,
            config: None,
            env: None,
            verbose: true,
            quiet: true,
        };
        assert!(execute_command(&cli).await.is_err());
    }
}
