//! Health check DTOs for API responses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "healthy",
    "version": "0.1.0",
    "timestamp": "2026-01-01T12:00:00Z",
    "checks": {
        "usuarios": {
            "status": "healthy",
            "message": "5 records",
            "response_time_ms": 0
        }
    }
}))]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Application version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Timestamp of the health check (RFC 3339)
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
    /// Per-component results
    pub checks: HashMap<String, ComponentHealth>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Individual component health information.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    pub message: Option<String>,
    /// Time spent on the check in milliseconds
    pub response_time_ms: Option<u64>,
}
