//! Prediction Route

use axum::extract::{Multipart, State};
use axum::Json;
use classifier::Prediction;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Classify an uploaded image
///
/// Expects a multipart body with a file field named `image`. The upload is
/// validated before the model handle is touched, so a request without an
/// image never triggers a model download.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Prediction>, ApiError> {
    let mut image_bytes = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            image_bytes = Some(field.bytes().await?);
            break;
        }
    }
    let image_bytes = image_bytes.ok_or(ApiError::MissingImage)?;

    let model = state.model().await?;
    let prediction = model.classify(&image_bytes)?;

    info!(
        "Returning prediction: {} (confidence {})",
        prediction.prediction, prediction.confidence
    );
    Ok(Json(prediction))
}
