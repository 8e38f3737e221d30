//! Usuario request handlers.
//!
//! Provides HTTP handlers for the in-memory usuario collection.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::USUARIOS_TAG;
use crate::api::dto::{
    CreateUsuarioRequest, ErrorResponse, ListUsuariosParams, MessageResponse, UsuarioResponse,
};
use crate::error::{AppError, AppResult};
use crate::services::{USUARIO_DELETED, USUARIO_NOT_FOUND};
use crate::state::AppState;
use crate::utils::number::parse_int_prefix;
use crate::utils::validate::ValidatedJson;

/// Creates usuario routes.
///
/// Routes:
/// - GET /         - List usuarios, optionally filtered
/// - POST /        - Create a usuario
/// - GET /{id}     - Get usuario by ID
/// - DELETE /{id}  - Delete usuario by ID
pub fn usuario_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_usuarios, create_usuario))
        .routes(routes!(get_usuario, delete_usuario))
}

/// Parses a path id from its leading integer. Without one it cannot name a record.
fn parse_id(raw: &str) -> AppResult<i32> {
    parse_int_prefix(raw).ok_or_else(|| AppError::not_found(USUARIO_NOT_FOUND))
}

/// GET /api/usuarios - List usuarios
///
/// Returns every usuario matching all supplied filters, in insertion order.
#[utoipa::path(
    get,
    path = "/",
    tag = USUARIOS_TAG,
    params(ListUsuariosParams),
    responses(
        (status = 200, description = "Lista de usuarios", body = Vec<UsuarioResponse>)
    )
)]
async fn list_usuarios(
    State(state): State<AppState>,
    query: Result<Query<ListUsuariosParams>, QueryRejection>,
) -> AppResult<Json<Vec<UsuarioResponse>>> {
    let Query(params) = query?;
    let filter = params.into_filter();

    let usuarios = state.services.usuarios.list_usuarios(&filter).await;
    Ok(Json(usuarios.into_iter().map(UsuarioResponse::from).collect()))
}

/// POST /api/usuarios - Create usuario
///
/// Returns 201 Created with the stored record, including its assigned id.
#[utoipa::path(
    post,
    path = "/",
    tag = USUARIOS_TAG,
    request_body = CreateUsuarioRequest,
    responses(
        (status = 201, description = "Usuario creado", body = UsuarioResponse),
        (status = 400, description = "Nombre y edad son requeridos", body = ErrorResponse)
    )
)]
async fn create_usuario(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUsuarioRequest>,
) -> AppResult<(StatusCode, Json<UsuarioResponse>)> {
    let new_usuario = payload.into_new_usuario()?;
    let usuario = state.services.usuarios.create_usuario(new_usuario).await?;
    Ok((StatusCode::CREATED, Json(UsuarioResponse::from(usuario))))
}

/// GET /api/usuarios/{id} - Get usuario by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = USUARIOS_TAG,
    params(
        ("id" = i32, Path, description = "ID del usuario")
    ),
    responses(
        (status = 200, description = "Usuario encontrado", body = UsuarioResponse),
        (status = 404, description = "Usuario no encontrado", body = ErrorResponse)
    )
)]
async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UsuarioResponse>> {
    let usuario = state.services.usuarios.get_usuario(parse_id(&id)?).await?;
    Ok(Json(UsuarioResponse::from(usuario)))
}

/// DELETE /api/usuarios/{id} - Delete usuario
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = USUARIOS_TAG,
    params(
        ("id" = i32, Path, description = "ID del usuario")
    ),
    responses(
        (status = 200, description = "Usuario eliminado", body = MessageResponse),
        (status = 404, description = "Usuario no encontrado", body = ErrorResponse)
    )
)]
async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .usuarios
        .delete_usuario(parse_id(&id)?)
        .await?;
    Ok(Json(MessageResponse::new(USUARIO_DELETED)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
        assert_eq!(parse_id("3abc").unwrap(), 3);
        assert_eq!(parse_id("1.5").unwrap(), 1);
        for raw in ["abc", "", "-"] {
            assert!(matches!(parse_id(raw), Err(AppError::NotFound { .. })));
        }
    }
}
