//! Route catalogue handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::RUTAS_TAG;
use crate::api::dto::{ErrorResponse, RutaResponse};
use crate::error::AppResult;
use crate::state::AppState;

pub fn ruta_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_rutas))
        .routes(routes!(get_ruta))
}

/// GET /api/rutas - List all routes
#[utoipa::path(
    get,
    path = "/",
    tag = RUTAS_TAG,
    responses(
        (status = 200, description = "Lista de rutas", body = Vec<RutaResponse>)
    )
)]
async fn list_rutas(State(state): State<AppState>) -> Json<Vec<RutaResponse>> {
    let rutas = state.services.rutas.list_rutas();
    Json(rutas.into_iter().map(RutaResponse::from).collect())
}

/// GET /api/rutas/{id} - Get route by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = RUTAS_TAG,
    params(
        ("id" = String, Path, description = "ID de la ruta")
    ),
    responses(
        (status = 200, description = "Ruta encontrada", body = RutaResponse),
        (status = 404, description = "Ruta no encontrada", body = ErrorResponse)
    )
)]
async fn get_ruta(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RutaResponse>> {
    let ruta = state.services.rutas.get_ruta(&id)?;
    Ok(Json(RutaResponse::from(ruta)))
}
