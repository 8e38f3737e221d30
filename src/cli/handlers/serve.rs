//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use crate::config::{ConfigLoader, Settings};
use crate::logger::LogLevelHandle;
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate configuration without starting the server
    ///
    /// Prints a short report to stdout since the logger is not set up yet.
    pub fn validate_only(&self) -> anyhow::Result<()> {
        self.config.validate()?;
        let logger = self.config.logger.clone().into_logger_config()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Logger: level {}, console {}, file {}",
            logger.level,
            on_off(logger.console.enabled),
            if logger.file.enabled {
                logger.file.path.display().to_string()
            } else {
                "off".to_string()
            }
        );
        if self.config.docs.enabled {
            println!(
                "✓ Swagger UI at {}, OpenAPI document at {}",
                self.config.docs.ui_path, self.config.docs.spec_path
            );
        } else {
            println!("✓ API documentation disabled");
        }
        println!(
            "✓ Store starts {}",
            if self.config.store.seed_sample_data {
                "with sample usuarios"
            } else {
                "empty"
            }
        );

        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    /// Start the server and block until it shuts down.
    ///
    /// With a `loader`, SIGHUP re-reads the configuration and applies the new
    /// log level.
    pub async fn run(
        self,
        log_handle: LogLevelHandle,
        loader: Option<ConfigLoader>,
    ) -> anyhow::Result<()> {
        let server = Server::new(self.config);
        let server = match loader {
            Some(loader) => server.with_log_reload(log_handle, loader),
            None => server,
        };
        server.run().await
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
