use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::carousel::CarouselError;
use crate::validation::FieldErrors;

/// Errors raised by a form controller. None of them affect other forms or the carousel.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("a submission is already in progress")]
    Busy,

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("a submission is already in progress")]
    Busy,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(fields) => AppError::Validation(fields),
            FormError::Busy => AppError::Busy,
            other @ (FormError::UnknownField(_) | FormError::InvalidValue { .. }) => {
                AppError::BadRequest(other.to_string())
            }
        }
    }
}

impl From<CarouselError> for AppError {
    fn from(err: CarouselError) -> Self {
        match err {
            CarouselError::OutOfRange { .. } => AppError::NotFound(err.to_string()),
            CarouselError::Empty | CarouselError::Stopped => AppError::Config(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Busy => StatusCode::CONFLICT,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            AppError::Validation(fields) => {
                serde_json::json!({ "error": self.to_string(), "fields": fields })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
