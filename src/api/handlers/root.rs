use axum::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::dto::MessageResponse;
use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "API de Información de Rutas";

pub fn root_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(root))
}

/// GET / - Service banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Mensaje de bienvenida", body = MessageResponse)
    )
)]
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}
