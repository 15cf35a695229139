//! Shared application state and lazy model initialization

use crate::config::ServerConfig;
use crate::error::ApiError;
use classifier::{Classifier, LabelSet};
use model_store::{ObjectLocation, RemoteStore};
use tokio::sync::OnceCell;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    /// Object store the model artifact is fetched from
    pub store: RemoteStore,
    /// Where the model artifact lives
    pub location: ObjectLocation,
    /// Class labels, fixed at startup
    pub labels: LabelSet,
    /// Confidence threshold for the fallback label
    pub threshold: f32,
    /// Lazily initialized model handle; loads at most once, a failed load
    /// leaves the cell empty so the next request retries
    model: OnceCell<Classifier>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            store: RemoteStore::new(config.store_endpoint.clone()),
            location: ObjectLocation::new(
                config.model_bucket.clone(),
                config.model_object.clone(),
            ),
            labels: LabelSet::ham10000(),
            threshold: config.confidence_threshold,
            model: OnceCell::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the cached model, downloading and building it on first use
    pub async fn model(&self) -> Result<&Classifier, ApiError> {
        self.model
            .get_or_try_init(|| async {
                let bytes = self.store.fetch(&self.location).await?;
                let model =
                    Classifier::from_bytes(&bytes, self.labels.clone(), self.threshold)?;
                info!("Model cached for the lifetime of the process");
                Ok(model)
            })
            .await
    }

    /// Whether the model handle has been initialized
    pub fn model_loaded(&self) -> bool {
        self.model.initialized()
    }
}
