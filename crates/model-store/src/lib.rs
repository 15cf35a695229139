//! Remote Object Store Client
//!
//! Downloads serialized model artifacts by bucket name and object path.
//! Credentials and bucket ACLs are managed outside this crate; the store
//! only needs HTTP read access to the object.

mod store;

pub use store::{ObjectLocation, RemoteStore, GCS_ENDPOINT};

use thiserror::Error;

/// Errors while fetching an object from the remote store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Object store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Object store returned status {status} for {url}")]
    Status { status: u16, url: String },
}
