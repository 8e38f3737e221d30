//! Error response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"error": "Usuario no encontrado"}))]
pub struct ErrorResponse {
    /// Human readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new error response with a message.
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_single_error_field() {
        let body = serde_json::to_value(ErrorResponse::new("Ruta no encontrada")).unwrap();
        assert_eq!(body, json!({"error": "Ruta no encontrada"}));
    }
}
