use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain confirmation message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"message": "Usuario eliminado exitosamente"}))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
