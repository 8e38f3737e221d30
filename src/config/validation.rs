//! Configuration validation logic
//!
//! Each section checks its own values and reports the first problem with the
//! dotted key of the offending setting.

use crate::config::error::ConfigError;
use crate::config::settings::{
    DocsConfig, FileSettings, LoggerSettings, ServerConfig, Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Host must not be empty
    /// - Port must be between 1 and 65535
    /// - Both timeouts must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host is required. Use 0.0.0.0 to listen on all interfaces.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.keep_alive_timeout == 0 {
            return Err(ConfigError::validation(
                "server.keep_alive_timeout",
                "Keep-alive timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        if self.rotation.max_size == 0 {
            return Err(ConfigError::validation(
                "logger.file.rotation.max_size",
                "Maximum file size must be greater than 0 bytes.",
            ));
        }

        if self.rotation.max_files == 0 {
            return Err(ConfigError::validation(
                "logger.file.rotation.max_files",
                "Maximum number of files must be greater than 0.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - At least one of console and file output must be enabled
    /// - File settings must be usable when file output is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl DocsConfig {
    /// Validate documentation settings
    ///
    /// Both paths must be absolute and distinct, since they are mounted on
    /// the same router.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, path) in [
            ("docs.ui_path", &self.ui_path),
            ("docs.spec_path", &self.spec_path),
        ] {
            if !path.starts_with('/') || path.len() < 2 {
                return Err(ConfigError::validation(
                    field,
                    format!("Path '{}' must start with '/' and name a route.", path),
                ));
            }
        }

        if self.ui_path == self.spec_path {
            return Err(ConfigError::validation(
                "docs.spec_path",
                "The OpenAPI document path must differ from the Swagger UI path.",
            ));
        }

        if let Some(url) = &self.server_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::validation(
                "docs.server_url",
                format!("Server URL '{}' must start with http:// or https://.", url),
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings, returning the first error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.logger.validate()?;
        self.docs.validate()?;
        Ok(())
    }
}
