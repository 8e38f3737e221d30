use axum::extract::rejection::{JsonRejection, QueryRejection};
use thiserror::Error;

use crate::models::REQUIRED_FIELDS_MESSAGE;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

/// Application-wide error type.
///
/// Every variant maps to exactly one HTTP status in the error handler, and
/// none of them is fatal to the process: a failure is scoped to the request
/// that produced it.
#[derive(Error, Debug)]
pub enum AppError {
    /// The requested resource does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// A required field is missing or has the wrong shape
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// One or more fields failed declarative validation
    #[error("Validation failed: {} field error(s)", errors.len())]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Malformed request that never reached validation
    #[error("Bad request: {message}")]
    BadRequest { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors: Vec<ValidationFieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| ValidationFieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        // HashMap iteration order is unstable
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::ValidationErrors {
            errors: field_errors,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON whose fields have the wrong type
            JsonRejection::JsonDataError(err) => AppError::Validation {
                field: "body".to_string(),
                reason: err.body_text(),
            },
            JsonRejection::JsonSyntaxError(err) => AppError::BadRequest {
                message: err.body_text(),
            },
            // A body that is not declared as JSON reads as an empty object
            JsonRejection::MissingJsonContentType(_) => {
                AppError::validation("body", REQUIRED_FIELDS_MESSAGE)
            }
            other => AppError::BadRequest {
                message: other.body_text(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(required(message = "b is required"))]
        b: Option<i32>,
        #[validate(length(min = 1, message = "a must not be empty"))]
        a: String,
    }

    #[test]
    fn test_validation_errors_are_sorted_by_field() {
        let sample = Sample {
            b: None,
            a: String::new(),
        };
        let err: AppError = sample.validate().unwrap_err().into();

        match err {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "a");
                assert_eq!(errors[0].message, "a must not be empty");
                assert_eq!(errors[1].field, "b");
                assert_eq!(errors[1].message, "b is required");
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_display() {
        let err = AppError::not_found("Usuario no encontrado");
        assert_eq!(err.to_string(), "Not found: Usuario no encontrado");
    }
}
