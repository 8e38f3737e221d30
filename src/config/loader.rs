//! Configuration loader for usuarios-api
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
pub const CONFIG_DIR_ENV: &str = "USUARIOS_CONFIG_DIR";

/// Environment variable for specific configuration file
pub const CONFIG_FILE_ENV: &str = "USUARIOS_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "USUARIOS";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Serializes tests that read or write process environment variables
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base default configuration (required)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `USUARIOS_*` environment variables (highest priority)
///
/// When a single file is selected the three file layers collapse into that
/// one file. Environment variables still apply on top.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader from the process environment
    ///
    /// This reads:
    /// - Configuration directory (`USUARIOS_CONFIG_DIR`)
    /// - Specific configuration file (`USUARIOS_CONFIG_FILE`)
    /// - Application environment (`USUARIOS_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `USUARIOS_CONFIG_DIR` and `USUARIOS_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let dir_from_env = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if dir_from_env.is_some() && config_file.is_some() {
            return Err(ConfigError::mutual_exclusivity(format!(
                "{} and {} cannot both be set. \
                 Use {} for layered configuration or \
                 {} for a single configuration file.",
                CONFIG_DIR_ENV, CONFIG_FILE_ENV, CONFIG_DIR_ENV, CONFIG_FILE_ENV
            )));
        }

        Ok(Self {
            config_dir: dir_from_env.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Loader for a single explicit file, e.g. from `--config`.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the environment used to pick the `{environment}.toml` layer.
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load and validate configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.toml` (or the selected single file) is not found
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings: Settings = self.build_config()?.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match &self.config_file {
            Some(config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // USUARIOS_SERVER__PORT -> server.port
        Self::add_env_source(builder)
            .build()
            .map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = Self::add_file_source(builder, &default_path, true)?;

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = Self::add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        Self::add_file_source(builder, &local_path, false)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        let source = path.to_str().ok_or_else(|| {
            ConfigError::ParseError(format!(
                "Configuration path is not valid UTF-8: {}",
                path.display()
            ))
        })?;

        Ok(builder.add_source(File::new(source, FileFormat::Toml).required(required)))
    }

    /// Environment variables with prefix `USUARIOS_` are mapped to configuration
    /// keys, with `__` separating nested keys:
    /// - `USUARIOS_SERVER__PORT` -> `server.port`
    /// - `USUARIOS_DOCS__ENABLED` -> `docs.enabled`
    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::MutexGuard;
    use tempfile::TempDir;

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
    }

    const DEFAULT_CONFIG: &str = r#"
[application]
name = "test-app"
version = "1.0.0"

[server]
host = "127.0.0.1"
port = 3000
request_timeout = 30
keep_alive_timeout = 75

[logger]
level = "info"

[logger.console]
enabled = true
colored = true

[logger.file]
enabled = false

[docs]
enabled = true
ui_path = "/api-docs"
spec_path = "/swagger.json"

[store]
seed_sample_data = true
"#;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Sets environment variables for one test and restores them on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        /// Starts from a clean slate for every variable the loader reads
        fn clean() -> Self {
            let mut guard = Self {
                vars_to_restore: Vec::new(),
            };
            for key in [
                CONFIG_DIR_ENV,
                CONFIG_FILE_ENV,
                AppEnvironment::ENV_VAR,
                "USUARIOS_SERVER__PORT",
                "USUARIOS_DOCS__ENABLED",
            ] {
                guard.remove(key);
            }
            guard
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_config_loader_new_default() {
        let _guard = env_lock();
        let _env = EnvGuard::clean();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file().is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity_error() {
        let _guard = env_lock();
        let mut env = EnvGuard::clean();
        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(CONFIG_FILE_ENV, "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains(CONFIG_DIR_ENV));
                assert!(msg.contains(CONFIG_FILE_ENV));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_config_loader_environment_from_env() {
        let _guard = env_lock();
        let mut env = EnvGuard::clean();
        env.set(AppEnvironment::ENV_VAR, "prod");

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.environment(), AppEnvironment::Production);
    }

    #[test]
    fn test_load_missing_default_toml() {
        let _guard = env_lock();
        let mut env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let result = ConfigLoader::new().unwrap().load();
        match result {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("default.toml")),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_default_toml_only() {
        let _guard = env_lock();
        let mut env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_CONFIG)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        // staging.toml and local.toml are optional
        env.set(AppEnvironment::ENV_VAR, "staging");

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        assert_eq!(settings.application.name, "test-app");
        assert_eq!(settings.server.port, 3000);
        assert!(settings.docs.enabled);
        assert!(settings.store.seed_sample_data);
    }

    #[test]
    fn test_load_full_precedence_chain() {
        let _guard = env_lock();
        let mut env = EnvGuard::clean();

        let development_config = r#"
[application]
name = "dev-app"

[server]
port = 3001

[docs]
server_url = "http://localhost:3001"
"#;
        let local_config = r#"
[server]
port = 3002

[store]
seed_sample_data = false
"#;

        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_CONFIG),
            ("development.toml", development_config),
            ("local.toml", local_config),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("USUARIOS_SERVER__PORT", "3003");
        env.set("USUARIOS_DOCS__ENABLED", "false");

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        // Environment variables win over every file
        assert_eq!(settings.server.port, 3003);
        assert!(!settings.docs.enabled);
        // local.toml over development.toml
        assert!(!settings.store.seed_sample_data);
        // development.toml over default.toml
        assert_eq!(settings.application.name, "dev-app");
        assert_eq!(
            settings.docs.server_url.as_deref(),
            Some("http://localhost:3001")
        );
        // default.toml provides the rest
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.application.version, "1.0.0");
    }

    #[test]
    fn test_with_environment_selects_layer() {
        let _guard = env_lock();
        let mut env = EnvGuard::clean();
        let production_config = r#"
[server]
host = "0.0.0.0"
port = 8080
"#;
        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_CONFIG),
            ("production.toml", production_config),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let loader = ConfigLoader::new()
            .unwrap()
            .with_environment(AppEnvironment::Production);
        let settings = loader.load().expect("Should load settings");

        assert_eq!(settings.server.address(), "0.0.0.0:8080");
        assert_eq!(settings.server.request_timeout, 30);
    }

    #[test]
    fn test_load_single_file_mode() {
        let _guard = env_lock();
        let mut env = EnvGuard::clean();
        let single_config = r#"
[server]
port = 5000

[logger]
level = "debug"
"#;
        let temp_dir = setup_config_dir(&[
            ("single.toml", single_config),
            ("local.toml", "[server]\nport = 9999\n"),
        ]);
        let config_file_path = temp_dir.path().join("single.toml");
        env.set(CONFIG_FILE_ENV, config_file_path.to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        // local.toml beside the file is not a layer in single file mode
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.docs.ui_path, "/api-docs");
    }

    #[test]
    fn test_from_file_missing() {
        let _guard = env_lock();
        let _env = EnvGuard::clean();

        let result = ConfigLoader::from_file("/definitely/not/here.toml").load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let _guard = env_lock();
        let _env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[(
            "bad.toml",
            "[docs]\nui_path = \"/same\"\nspec_path = \"/same\"\n",
        )]);

        let result = ConfigLoader::from_file(temp_dir.path().join("bad.toml")).load();
        match result {
            Err(e) => assert_eq!(e.field(), Some("docs.spec_path")),
            Ok(_) => panic!("Expected validation error"),
        }
    }
}
