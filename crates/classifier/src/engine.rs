//! ONNX session wrapper and score postprocessing

use crate::labels::{LabelSet, FALLBACK_LABEL};
use crate::preprocess::preprocess;
use crate::ClassifierError;
use ort::{GraphOptimizationLevel, Session};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Final classification returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Diagnosis code, or the fallback label below the threshold
    pub prediction: String,
    /// Confidence score (0.0 to 1.0)
    pub confidence: f32,
}

/// Loaded inference engine plus the label table and threshold it reports with
pub struct Classifier {
    session: Session,
    labels: LabelSet,
    threshold: f32,
}

impl Classifier {
    /// Build a classifier from serialized model bytes
    ///
    /// The session allocates its internal buffers here, so a returned
    /// classifier is ready to invoke.
    pub fn from_bytes(
        model_bytes: &[u8],
        labels: LabelSet,
        threshold: f32,
    ) -> Result<Self, ClassifierError> {
        info!("Building inference session from {} bytes", model_bytes.len());

        let session = Session::builder()
            .and_then(|b| b.with_optimization_level(GraphOptimizationLevel::Level3))
            .and_then(|b| b.commit_from_memory(model_bytes))
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;

        info!("Model loaded successfully");
        Ok(Self {
            session,
            labels,
            threshold,
        })
    }

    /// Classify one uploaded image
    pub fn classify(&self, image_bytes: &[u8]) -> Result<Prediction, ClassifierError> {
        let input = preprocess(image_bytes)?;

        let outputs = self
            .session
            .run(ort::inputs![input].map_err(|e| ClassifierError::Inference(e.to_string()))?)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output_name = self
            .session
            .outputs
            .first()
            .map(|o| o.name.as_str())
            .ok_or_else(|| ClassifierError::Inference("model has no outputs".to_string()))?;
        let scores = outputs[output_name]
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let scores: Vec<f32> = scores.iter().copied().collect();

        postprocess(&scores, &self.labels, self.threshold)
    }
}

/// Map raw output scores to a labeled prediction
///
/// Takes the argmax as the class and its value as the confidence. Below the
/// threshold the result is overridden to the fallback label with confidence
/// 1.0, matching the product behavior the model ships with.
pub fn postprocess(
    scores: &[f32],
    labels: &LabelSet,
    threshold: f32,
) -> Result<Prediction, ClassifierError> {
    if scores.len() != labels.len() {
        return Err(ClassifierError::OutputShape {
            expected: labels.len(),
            actual: scores.len(),
        });
    }

    let (class_index, &confidence) = scores
        .iter()
        .enumerate()
        .max_by(|&(_, a), &(_, b)| a.total_cmp(b))
        .ok_or(ClassifierError::OutputShape {
            expected: labels.len(),
            actual: 0,
        })?;
    debug!(
        "Raw prediction: class_index={}, confidence={}",
        class_index, confidence
    );

    if confidence < threshold {
        return Ok(Prediction {
            prediction: FALLBACK_LABEL.to_string(),
            confidence: 1.0,
        });
    }

    let label = labels
        .get(class_index)
        .ok_or(ClassifierError::OutputShape {
            expected: labels.len(),
            actual: scores.len(),
        })?;

    Ok(Prediction {
        prediction: label.to_string(),
        confidence,
    })
}
