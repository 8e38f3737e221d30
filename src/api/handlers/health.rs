//! Health check endpoint handlers.
//!
//! Liveness answers as long as the process can respond. The full check also
//! reads the usuario store, so a stuck lock shows up as a slow check.

use std::collections::HashMap;
use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{ComponentHealth, HealthResponse, HealthStatus};
use crate::state::AppState;

/// Creates health check routes.
///
/// # Routes
/// - `GET /health` - Health check with component details
/// - `GET /health/live` - Liveness probe
pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health_check))
        .routes(routes!(liveness_check))
}

/// Health check endpoint.
///
/// Always answers `200 OK`. A store read slower than `SLOW_STORE_MS` is
/// reported as `degraded` in the body.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy or degraded", body = HealthResponse)
    ),
    tag = HEALTH_TAG
)]
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_check = check_store(&state).await;
    let overall_status = store_check.status;

    let mut checks = HashMap::new();
    checks.insert("usuarios".to_string(), store_check);

    Json(HealthResponse {
        status: overall_status,
        version: crate::pkg_version().to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
        checks,
    })
}

/// Liveness probe endpoint.
///
/// # Responses
/// - `200 OK` - Service is alive
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = HEALTH_TAG
)]
async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

/// Store reads slower than this are reported as degraded.
const SLOW_STORE_MS: u64 = 500;

async fn check_store(state: &AppState) -> ComponentHealth {
    let start = Instant::now();
    let count = state.services.usuarios.count().await;
    let elapsed = start.elapsed().as_millis() as u64;

    let status = if elapsed > SLOW_STORE_MS {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    ComponentHealth {
        status,
        message: Some(format!("{} records", count)),
        response_time_ms: Some(elapsed),
    }
}
