use utoipa::OpenApi;

pub const USUARIOS_TAG: &str = "Usuarios";
pub const RUTAS_TAG: &str = "Rutas";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Usuarios",
        description = "API para gestionar usuarios",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::MessageResponse,
        )
    ),
    tags(
        (name = USUARIOS_TAG, description = "Gestión de usuarios"),
        (name = RUTAS_TAG, description = "Catálogo de rutas"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
