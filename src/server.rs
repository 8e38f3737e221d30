//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::{ConfigLoader, Settings};
use crate::logger::LogLevelHandle;
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
    log_reload: Option<(LogLevelHandle, ConfigLoader)>,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            log_reload: None,
        }
    }

    /// Re-apply `logger.level` from `loader` whenever the process gets SIGHUP.
    pub fn with_log_reload(mut self, handle: LogLevelHandle, loader: ConfigLoader) -> Self {
        self.log_reload = Some((handle, loader));
        self
    }

    /// Start the server and run until shutdown signal
    ///
    /// # Errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        let settings = &self.settings;

        tracing::info!(
            app_name = %settings.application.name,
            app_version = %settings.application.version,
            "Application starting"
        );

        tracing::info!(
            host = %settings.server.host,
            port = settings.server.port,
            request_timeout = settings.server.request_timeout,
            keep_alive_timeout = settings.server.keep_alive_timeout,
            "Server configuration loaded"
        );

        tracing::info!(
            level = %settings.logger.level,
            console_enabled = settings.logger.console.enabled,
            file_enabled = settings.logger.file.enabled,
            "Logger configuration loaded"
        );

        let state = AppState::new(&settings.store, settings.docs.clone())
            .with_request_timeout(Duration::from_secs(settings.server.request_timeout));
        tracing::info!(
            usuarios = state.services.usuarios.count().await,
            seeded = settings.store.seed_sample_data,
            "Application state created"
        );

        let router = create_router(state);
        if settings.docs.enabled {
            tracing::info!(
                ui_path = %settings.docs.ui_path,
                spec_path = %settings.docs.spec_path,
                "API documentation enabled"
            );
        }

        let address = settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        let reload_task = self
            .log_reload
            .map(|(handle, loader)| tokio::spawn(reload_log_level_on_hangup(handle, loader)));

        let served = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error");

        if let Some(task) = reload_task {
            task.abort();
        }
        served?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(unix)]
async fn reload_log_level_on_hangup(handle: LogLevelHandle, loader: ConfigLoader) {
    let mut hangup = match signal::unix::signal(signal::unix::SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install SIGHUP handler, log level reload disabled");
            return;
        }
    };

    while hangup.recv().await.is_some() {
        let loader = loader.clone();
        match tokio::task::spawn_blocking(move || loader.load()).await {
            Ok(Ok(settings)) => apply_log_level(&handle, &settings.logger.level),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Configuration reload failed, keeping current log level")
            }
            Err(e) => tracing::error!(error = %e, "Configuration reload task failed"),
        }
    }
}

#[cfg(not(unix))]
async fn reload_log_level_on_hangup(_handle: LogLevelHandle, _loader: ConfigLoader) {}

fn apply_log_level(handle: &LogLevelHandle, level: &str) {
    let previous = handle.current_level();
    if previous.as_deref() == Some(level) {
        tracing::debug!(level = %level, "Log level unchanged after reload");
        return;
    }

    match handle.set_level(level) {
        Ok(()) => tracing::info!(
            previous = previous.as_deref().unwrap_or("unknown"),
            level = %level,
            "Log level reloaded"
        ),
        Err(e) => tracing::warn!(error = %e, level = %level, "Rejected reloaded log level"),
    }
}
