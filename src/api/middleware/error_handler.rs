//! Error handler for converting AppError to HTTP responses.
//!
//! Implements `IntoResponse` for `AppError` and a fallback middleware that
//! rewrites any non-JSON error response into the same `{"error": ...}` shape.

use axum::{
    Json,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

/// Framework error texts are short; anything longer falls back to the default message.
const MAX_ERROR_BODY_BYTES: usize = 8 * 1024;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Validation → 400 BAD_REQUEST
    /// - ValidationErrors → 400 BAD_REQUEST
    /// - BadRequest → 400 BAD_REQUEST
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let error_response = match &self {
            AppError::NotFound { message } => ErrorResponse::new(message),
            AppError::Validation { field, reason } => {
                tracing::debug!(field = %field, reason = %reason, "Request rejected by validation");
                ErrorResponse::new(reason)
            }
            AppError::ValidationErrors { errors } => {
                tracing::debug!(errors = ?errors, "Request rejected by validation");
                let message = errors
                    .first()
                    .map(|e| e.message.as_str())
                    .unwrap_or("Validation failed");
                ErrorResponse::new(message)
            }
            AppError::BadRequest { message } => ErrorResponse::new(message),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
    }
}

/// Global error handling middleware.
///
/// Error responses produced outside the handlers (unknown routes, wrong
/// methods, framework rejections) carry plain text bodies. This rewrites
/// them as `ErrorResponse`, keeping the original text when there is one.
/// 5xx texts are always replaced by the default message.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if is_json {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, MAX_ERROR_BODY_BYTES)
        .await
        .unwrap_or_default();
    let original_message = String::from_utf8_lossy(&body_bytes).trim().to_string();

    let message = if original_message.is_empty() {
        default_message(status).to_string()
    } else if status.is_server_error() {
        default_message(status).to_string()
    } else {
        original_message
    };

    // Stale length and type headers would describe the old body
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.remove(header::CONTENT_TYPE);

    let mut rewritten = (status, Json(ErrorResponse::new(&message))).into_response();
    for (name, value) in parts.headers.iter() {
        rewritten.headers_mut().insert(name.clone(), value.clone());
    }
    rewritten
}

fn default_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request - invalid or malformed request",
        StatusCode::NOT_FOUND => "The requested resource was not found",
        StatusCode::METHOD_NOT_ALLOWED => "HTTP method not allowed for this endpoint",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "Unsupported media type",
        StatusCode::REQUEST_TIMEOUT => "Request timeout",
        StatusCode::PAYLOAD_TOO_LARGE => "Request payload too large",
        StatusCode::SERVICE_UNAVAILABLE => "Service temporarily unavailable",
        s if s.is_server_error() => "An internal server error occurred",
        _ => "An unknown error occurred",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware, routing::get};
    use serde_json::json;
    use tower::ServiceExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            error_to_status_code(&AppError::not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_to_status_code(&AppError::validation("edad", "x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_to_status_code(&AppError::ValidationErrors { errors: vec![] }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_to_status_code(&AppError::BadRequest {
                message: "x".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = AppError::not_found("Usuario no encontrado").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Usuario no encontrado"})
        );
    }

    #[tokio::test]
    async fn test_validation_body_has_reason_only() {
        let response =
            AppError::validation("nombre", "Nombre y edad son requeridos").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Nombre y edad son requeridos"})
        );
    }

    #[tokio::test]
    async fn test_global_handler_rewrites_plain_text_errors() {
        let app = Router::new()
            .route(
                "/teapot",
                get(|| async { (StatusCode::BAD_REQUEST, "Custom validation failed") }),
            )
            .layer(middleware::from_fn(global_error_handler));

        let response = app
            .oneshot(Request::builder().uri("/teapot").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Custom validation failed"})
        );
    }

    #[tokio::test]
    async fn test_global_handler_hides_server_error_text() {
        let app = Router::new()
            .route(
                "/boom",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "secret connection string",
                    )
                }),
            )
            .layer(middleware::from_fn(global_error_handler));

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "An internal server error occurred"}));
        assert!(!body.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn test_global_handler_ignores_oversized_error_body() {
        let app = Router::new()
            .route(
                "/huge",
                get(|| async { (StatusCode::BAD_REQUEST, "x".repeat(MAX_ERROR_BODY_BYTES + 1)) }),
            )
            .layer(middleware::from_fn(global_error_handler));

        let response = app
            .oneshot(Request::builder().uri("/huge").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Bad request - invalid or malformed request"})
        );
    }
}
