use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use domain::error::DomainError;
use wallforge_application::error::AppError;

pub struct HttpError(pub AppError);

impl HttpError {
    fn status_and_message(&self) -> (StatusCode, String) {
        let app_error = &self.0;

        match app_error {
            AppError::Domain(
                DomainError::DecodeError(_)
                | DomainError::UnsupportedFormat(_)
                | DomainError::InvalidResolution(_),
            ) => (StatusCode::BAD_REQUEST, app_error.to_string()),

            AppError::Domain(DomainError::EncodeError(_) | DomainError::InvalidFrame(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to encode wallpaper".to_string(),
            ),

            AppError::ValidationError { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, app_error.to_string())
            }

            AppError::PayloadTooLarge { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, app_error.to_string())
            }

            AppError::Timeout { .. } => (StatusCode::SERVICE_UNAVAILABLE, app_error.to_string()),

            AppError::ConfigError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),

            AppError::StorageError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Storage error".to_string(),
            ),

            AppError::TaskError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status_code, message) = self.status_and_message();

        if status_code.is_client_error() {
            debug!("Client error response generated: {}", self.0);
        } else {
            error!("Server error response generated: {}", self.0);
        }

        let error_response = json!({
            "ok": false,
            "error": message,
            "status": status_code.as_u16()
        });

        (status_code, Json(error_response)).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AppError) -> StatusCode {
        HttpError(error).into_response().status()
    }

    #[test]
    fn maps_client_errors() {
        assert_eq!(
            status_of(DomainError::DecodeError("bad".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::UnsupportedFormat("webp".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::InvalidResolution("0x0".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::ValidationError {
                message: "no file".into()
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AppError::PayloadTooLarge {
                message: "limit".into()
            }),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn maps_server_errors() {
        assert_eq!(
            status_of(DomainError::EncodeError("boom".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::StorageError {
                message: "disk full".into()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::TaskError {
                message: "panicked".into()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::Timeout { seconds: 30 }),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
