//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Error bodies are JSON `{"error": message}`,
//! the shape the frontend already parses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use miola_core::CatalogError;

/// Application-level error type for the catalog backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog mutation failed (currently always image-not-found).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Bad request from client (missing file, non-image upload).
    #[error("{0}")]
    BadRequest(String),

    /// Multipart form decoding failed.
    #[error("Invalid multipart request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Catalog(CatalogError::ImageNotFound) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
