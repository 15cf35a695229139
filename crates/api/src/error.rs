//! Error-to-response mapping at the HTTP boundary

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use classifier::ClassifierError;
use model_store::StoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by request handlers
///
/// Only a missing upload is a client error; model load, decode, and
/// inference failures all map to 500 with their own message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image provided")]
    MissingImage,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error("Failed to read multipart body: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

/// Error payload body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingImage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        if status.is_client_error() {
            warn!("Rejecting request: {}", message);
        } else {
            error!("Error during prediction: {}", message);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
