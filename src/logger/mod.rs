//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output in full, compact or JSON format with size-based rotation
//! - Changing the level at runtime through [`LogLevelHandle`]

pub mod config;
pub mod error;
pub mod rotation;
pub(crate) mod writer;

pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use std::sync::Arc;

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::Layered, layer::SubscriberExt, reload,
    util::SubscriberInitExt,
};
use writer::RotatingFileWriter;

type FilteredRegistry = Layered<reload::Layer<EnvFilter, Registry>, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync>;

/// Handle for changing the active log level after initialization.
#[derive(Clone)]
pub struct LogLevelHandle {
    inner: Arc<reload::Handle<EnvFilter, Registry>>,
}

impl LogLevelHandle {
    /// Replaces the active filter with `level`.
    pub fn set_level(&self, level: &str) -> Result<(), LoggerError> {
        parse_level(level)?;
        let filter = EnvFilter::try_new(level)
            .map_err(|e| LoggerError::config(format!("Invalid log filter '{}': {}", level, e)))?;
        self.inner
            .reload(filter)
            .map_err(|e| LoggerError::config(format!("Failed to reload log level: {}", e)))
    }

    /// The active filter as a string, `None` if the subscriber is gone.
    pub fn current_level(&self) -> Option<String> {
        self.inner.with_current(|filter| filter.to_string()).ok()
    }
}

/// Initialize the global subscriber with the given configuration
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<LogLevelHandle> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, reload_handle) = reload::Layer::new(filter);

    // File layer must come before the console layer, otherwise ANSI codes
    // from span fields leak into the file output (tokio-rs/tracing#1817)
    let mut layers: Vec<BoxedLayer> = Vec::new();
    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }
    if config.console.enabled {
        layers.push(console_layer(&config.console));
    }

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(layers)
        .try_init()?;

    Ok(LogLevelHandle {
        inner: Arc::new(reload_handle),
    })
}

fn console_layer(config: &ConsoleConfig) -> BoxedLayer {
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .boxed()
}

fn file_layer(config: &FileConfig) -> anyhow::Result<BoxedLayer> {
    let writer = RotatingFileWriter::new(config)?;

    let layer = match config.format {
        LogFormat::Full => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_ansi(false)
            .json()
            .with_writer(writer)
            .boxed(),
    };

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Runs `f` with a handle wired to a scoped subscriber instead of the global one.
    fn with_test_handle<F, R>(initial_level: &str, f: F) -> R
    where
        F: FnOnce(&LogLevelHandle) -> R,
    {
        let filter = EnvFilter::try_new(initial_level).unwrap_or_else(|_| EnvFilter::new("info"));
        let (filter_layer, reload_handle) = reload::Layer::new(filter);

        let subscriber = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer().with_writer(std::io::sink));

        let handle = LogLevelHandle {
            inner: Arc::new(reload_handle),
        };

        tracing::subscriber::with_default(subscriber, || f(&handle))
    }

    #[test]
    fn test_set_level_rejects_unknown_level() {
        with_test_handle("info", |handle| {
            assert!(handle.set_level("loud").is_err());
            assert_eq!(handle.current_level().as_deref(), Some("info"));
        });
    }

    #[test]
    fn test_init_logger_requires_an_output() {
        let config = LoggerConfig {
            console: ConsoleConfig::new(false, false),
            ..Default::default()
        };
        assert!(init_logger(config).is_err());
    }

    proptest! {
        #[test]
        fn property_set_level_is_reflected(level_idx in 0usize..5usize) {
            let levels = ["trace", "debug", "info", "warn", "error"];
            let new_level = levels[level_idx];
            let initial = if level_idx == 0 { "info" } else { "trace" };

            with_test_handle(initial, |handle| {
                prop_assert!(handle.set_level(new_level).is_ok());
                prop_assert_eq!(handle.current_level(), Some(new_level.to_string()));
                Ok(())
            })?;
        }
    }
}
