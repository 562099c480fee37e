use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        FromRequest,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ats::extract::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders the `{success: false, code, message}` envelope the
/// frontend checks for.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Too many requests")]
    RateLimited,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
        }
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Validation(format!("Invalid upload: {}", rejection.body_text()))
    }
}

/// `Json` extractor whose rejections render through `AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(e) => {
                tracing::warn!("Resume extraction failed: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_ERROR",
                    e.to_string(),
                )
            }
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "Too many requests. Please slow down.".to_string(),
            ),
        };

        let body = Json(json!({
            "success": false,
            "code": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
