use crate::error::{AppError, AppResult};
use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// Both rejection kinds surface as [`AppError`], so handlers return the
/// standard error body for malformed and for invalid input alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::REQUIRED_FIELDS_MESSAGE;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, message = "nombre must not be empty"))]
        nombre: String,
        #[validate(range(min = 1, message = "edad must be positive"))]
        edad: i32,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let request = json_request(r#"{"nombre": "Zoe", "edad": 40}"#);
        let ValidatedJson(body) = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(body.nombre, "Zoe");
        assert_eq!(body.edad, 40);
    }

    #[tokio::test]
    async fn test_validation_errors_for_every_field() {
        let request = json_request(r#"{"nombre": "", "edad": 0}"#);
        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();

        match error {
            AppError::ValidationErrors { errors } => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["edad", "nombre"]);
            }
            _ => panic!("Expected ValidationErrors error, got {:?}", error),
        }
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let request = json_request("{not json");
        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_validation() {
        let request = json_request(r#"{"nombre": "Zoe", "edad": "old"}"#);
        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::Validation { ref field, .. } if field == "body"));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .body(Body::from(r#"{"nombre": "Zoe", "edad": 40}"#))
            .unwrap();

        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();
        match error {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "body");
                assert_eq!(reason, REQUIRED_FIELDS_MESSAGE);
            }
            _ => panic!("Expected Validation error, got {:?}", error),
        }
    }
}
