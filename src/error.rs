// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::provider::ProviderError;

pub const MISSING_MESSAGE: &str = "Missing 'message' in request body";
pub const EMPTY_MESSAGE: &str = "Message cannot be empty";
pub const PROVIDER_FAILED: &str = "Failed to get response from AI";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("provider failure: {0}")]
    Provider(#[from] ProviderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Provider(err) => {
                // Detail stays in the server log.
                tracing::error!(error = %err, "Error during chat generation");
                (StatusCode::INTERNAL_SERVER_ERROR, PROVIDER_FAILED)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
