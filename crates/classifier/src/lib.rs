//! Skin Lesion Classifier
//!
//! The full inference pipeline for a single uploaded image:
//! - decode and resize to the model's fixed 224x224 input
//! - normalize into a (1, 224, 224, 3) f32 tensor in [0, 1]
//! - run the ONNX model
//! - map the output scores to a diagnosis label with a confidence threshold

pub mod engine;
pub mod labels;
pub mod preprocess;

pub use engine::{postprocess, Classifier, Prediction};
pub use labels::{LabelSet, DEFAULT_CONFIDENCE_THRESHOLD, FALLBACK_LABEL};
pub use preprocess::{preprocess, INPUT_SIZE};

use thiserror::Error;

/// Errors from the classification pipeline, one variant per stage
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Model loading failed: {0}")]
    ModelLoad(String),

    #[error("Image decoding failed: {0}")]
    Decode(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Model output has unexpected shape: expected {expected} scores, got {actual}")]
    OutputShape { expected: usize, actual: usize },
}
