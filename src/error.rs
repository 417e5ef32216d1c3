use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::dao::storage::StorageError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Reading or writing persisted data failed.
    #[error("{0}")]
    Storage(#[from] StorageError),
    /// Invalid input provided by the client.
    #[error("{0}")]
    InvalidInput(String),
    /// The request did not carry the expected file.
    #[error("{0}")]
    MissingUpload(String),
    /// Uploaded content exceeds the configured limit.
    #[error("{0}")]
    PayloadTooLarge(String),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        let message = err
            .message
            .map(|message| message.into_owned())
            .unwrap_or_else(|| err.code.into_owned());
        ServiceError::InvalidInput(message)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("{0}")]
    BadRequest(String),
    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(source) => AppError::Internal(source.to_string()),
            ServiceError::InvalidInput(message)
            | ServiceError::MissingUpload(message)
            | ServiceError::PayloadTooLarge(message) => AppError::BadRequest(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let payload = Json(ErrorBody {
            error: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use axum::body::to_bytes;
    use serde_json::{Value, json};

    use super::*;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_failures_render_as_400_with_message() {
        let err: AppError = ServiceError::InvalidInput("Index out of range".into()).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Index out of range" }));
    }

    #[tokio::test]
    async fn storage_failures_render_as_500() {
        let source = StorageError::Io {
            path: "score.json".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err: AppError = ServiceError::from(source).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "failed to access `score.json`: denied" }));
    }

    #[test]
    fn validation_error_message_is_kept() {
        let mut source = ValidationError::new("logo_extension");
        source.message = Some("Only PNG/JPG/WEBP allowed".into());
        let err = ServiceError::from(source);
        assert_eq!(err.to_string(), "Only PNG/JPG/WEBP allowed");
    }
}
