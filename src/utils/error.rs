use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::store::StoreError;

pub const ROOM_NOT_FOUND: &str = "Room not found";
pub const INVALID_ROOM_ID: &str = "Invalid room ID";

#[derive(Debug, Serialize)]
pub struct AppError {
    #[serde(skip)]
    pub status: u16,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl AppError {
    pub fn new(status: StatusCode, error: String) -> Self {
        Self {
            status: status.as_u16(),
            error,
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ROOM_NOT_FOUND.to_string())
    }

    /// Maps a store failure to a response. Database details are logged and
    /// replaced by `context` so they never reach the client.
    pub fn from_store(err: StoreError, context: &str) -> Self {
        match err {
            StoreError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message),
            StoreError::InvalidId(_) => {
                Self::new(StatusCode::BAD_REQUEST, INVALID_ROOM_ID.to_string())
            }
            StoreError::Database(message) => {
                error!(error = %message, "{}", context);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::from_store(
            StoreError::Validation("Room validation failed: name is required".to_string()),
            "Failed to create room",
        );

        assert_eq!(err.status, 400);
        assert_eq!(err.error, "Room validation failed: name is required");
    }

    #[test]
    fn test_invalid_id_uses_fixed_message() {
        let err = AppError::from_store(StoreError::InvalidId("abc".to_string()), "ignored");

        assert_eq!(err.status, 400);
        assert_eq!(err.error, INVALID_ROOM_ID);
    }

    #[test]
    fn test_database_message_is_hidden() {
        let err = AppError::from_store(
            StoreError::Database("connection reset by peer".to_string()),
            "Failed to fetch rooms",
        );

        assert_eq!(err.status, 500);
        assert_eq!(err.error, "Failed to fetch rooms");
    }

    #[test]
    fn test_body_only_carries_error_field() {
        let body = serde_json::to_value(AppError::not_found()).unwrap();

        assert_eq!(body, serde_json::json!({ "error": "Room not found" }));
    }

    #[tokio::test]
    async fn test_into_response_uses_status() {
        let response = AppError::not_found().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
