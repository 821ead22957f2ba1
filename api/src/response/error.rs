//! Request-boundary error taxonomy and its HTTP mapping.
//!
//! Handlers return `Result<_, ApiError>`; the `IntoResponse` impl renders
//! the variant as a status code plus an `{"error": ...}` body. Store
//! failures are logged server-side with context and surfaced to the client
//! only as the generic per-endpoint message, so connection strings and
//! credentials never leak.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::StoreError;
use thiserror::Error;
use tracing::error;

use crate::response::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input. Checked eagerly, before any store
    /// call. Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// No document matched the request. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// A guarded space reservation failed because the lesson has fewer
    /// spaces than requested. Maps to 409.
    #[error("{0}")]
    Insufficient(String),

    /// A store operation failed. The source is logged, the client sees
    /// only `message`. Maps to 500.
    #[error("{message}")]
    Store {
        message: String,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn store(message: impl Into<String>, source: StoreError) -> Self {
        Self::Store {
            message: message.into(),
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Insufficient(message) => (StatusCode::CONFLICT, message),
            ApiError::Store { message, source } => {
                error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
