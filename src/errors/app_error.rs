//! Application-level error type shared by the HTTP handlers
//!
//! Each variant maps to a fixed HTTP status and JSON body. Vendor error
//! detail is logged server-side and never exposed to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::core::twilio::TwilioError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The outbound-call request had no usable destination number
    #[error("phone number is required")]
    MissingNumber,

    /// The inbound request had no usable Host header, so the TwiML callback
    /// URL cannot be constructed
    #[error("a valid Host header is required")]
    MissingHost,

    /// The Twilio call-creation request failed
    #[error("call creation failed: {0}")]
    CallFailed(#[from] TwilioError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingNumber => (StatusCode::BAD_REQUEST, "Phone number is required"),
            AppError::MissingHost => (
                StatusCode::BAD_REQUEST,
                "A valid Host header is required to build the callback URL",
            ),
            AppError::CallFailed(err) => {
                tracing::error!(error = %err, "Error initiating outbound call");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to initiate call")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_number_maps_to_400() {
        let response = AppError::MissingNumber.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Phone number is required");
    }

    #[tokio::test]
    async fn test_call_failure_maps_to_500_with_generic_message() {
        let err = AppError::CallFailed(TwilioError::Api {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "authentication failed".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Failed to initiate call");
        // Vendor detail must not leak to the caller
        assert!(!body.to_string().contains("authentication failed"));
    }
}
