//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::time::Duration;

use crate::config::{DocsConfig, ServerConfig, StoreConfig};
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since every service shares its store via `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// API documentation settings used when building the router
    pub docs: DocsConfig,
    /// Requests running longer than this are answered with 408
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates the repositories and services for one server instance.
    ///
    /// # Example
    /// ```ignore
    /// let state = AppState::new(&settings.store, settings.docs.clone());
    /// let router = create_router(state);
    /// ```
    pub fn new(store: &StoreConfig, docs: DocsConfig) -> Self {
        let repos = Repositories::new(store);
        let services = Services::new(repos);
        Self {
            services,
            docs,
            request_timeout: Duration::from_secs(ServerConfig::default().request_timeout),
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(&StoreConfig::default(), DocsConfig::default())
    }
}
