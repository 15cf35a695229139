//! Object download implementation

use crate::StoreError;
use tracing::{debug, info};

/// Public Google Cloud Storage endpoint
pub const GCS_ENDPOINT: &str = "https://storage.googleapis.com";

/// Location of an object in the remote store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    /// Bucket name
    pub bucket: String,
    /// Object path within the bucket
    pub object: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
        }
    }
}

/// HTTP client for a bucket-addressed object store
pub struct RemoteStore {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteStore {
    /// Create a store client against a custom endpoint (emulators, mirrors)
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// URL of an object under this store's endpoint
    pub fn object_url(&self, location: &ObjectLocation) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            location.bucket,
            location.object
        )
    }

    /// Download the full object into memory
    ///
    /// No retry and no partial reads; a failure at any point surfaces as a
    /// single `StoreError` for the caller to handle.
    pub async fn fetch(&self, location: &ObjectLocation) -> Result<Vec<u8>, StoreError> {
        let url = self.object_url(location);
        info!(
            "Downloading object from bucket: {}, path: {}",
            location.bucket, location.object
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await?;
        debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

impl Default for RemoteStore {
    fn default() -> Self {
        Self::new(GCS_ENDPOINT)
    }
}
