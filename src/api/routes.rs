//! Router configuration for the API.
//!
//! Registers every handler through `OpenApiRouter` so the OpenAPI document
//! is collected from the same route table that serves requests.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa::openapi::server::ServerBuilder;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{global_error_handler, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Last added runs first:
/// 1. CORS
/// 2. Compression
/// 3. Request ID, so every later log line can carry it
/// 4. Logging
/// 5. Global error handler, which also turns timeouts into JSON
/// 6. Request timeout, closest to the handlers
///
/// # Routes
/// - `/` - Service banner
/// - `/health`, `/health/live` - Health checks
/// - `/api/usuarios` - Usuario operations
/// - `/api/rutas` - Route catalogue
/// - docs UI and JSON at the configured paths, when enabled
pub fn create_router(state: AppState) -> Router {
    let (router, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::root::root_routes())
        .merge(handlers::health::health_routes())
        .nest("/api/usuarios", handlers::usuarios::usuario_routes())
        .nest("/api/rutas", handlers::rutas::ruta_routes())
        .split_for_parts();

    let docs = &state.docs;
    if let Some(url) = &docs.server_url {
        api.servers = Some(vec![
            ServerBuilder::new()
                .url(url.clone())
                .description(Some("Servidor de desarrollo"))
                .build(),
        ]);
    }

    let router = if docs.enabled {
        router.merge(SwaggerUi::new(docs.ui_path.clone()).url(docs.spec_path.clone(), api))
    } else {
        router
    };

    router
        .layer(TimeoutLayer::new(state.request_timeout))
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
