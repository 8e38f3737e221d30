//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override values loaded from files and environment variables.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

/// Applies CLI overrides on top of file-based configuration
pub struct ConfigurationMerger {
    base_config: Settings,
    loader: Option<ConfigLoader>,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self {
            base_config,
            loader: None,
        }
    }

    /// Loads the base configuration the way the CLI asks for it.
    ///
    /// `--config` selects a single file, otherwise the layered loader reads
    /// `USUARIOS_CONFIG_DIR`/`USUARIOS_CONFIG_FILE`. `--env` overrides
    /// `USUARIOS_APP_ENV` in both cases.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = match &cli.config {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new()?,
        };
        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        let base_config = loader.load()?;
        Ok(Self {
            base_config,
            loader: Some(loader),
        })
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// Precedence, highest first: `serve --log-level`, then
    /// `--verbose`/`--quiet`, then configuration values.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Configuration as loaded, before CLI overrides
    pub fn config(&self) -> &Settings {
        &self.base_config
    }

    /// The loader used for the base configuration, reused on reload
    pub fn loader(&self) -> Option<&ConfigLoader> {
        self.loader.as_ref()
    }
}
