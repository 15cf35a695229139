//! Class label configuration

use serde::{Deserialize, Serialize};

/// Label returned when no class clears the confidence threshold
pub const FALLBACK_LABEL: &str = "normal";

/// Minimum confidence required to report a lesion class
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.75;

/// Ordered class labels, positionally aligned with the model's output vector
///
/// Built once at startup and shared read-only; the handler never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// The HAM10000 lesion codes the production model was trained on
    pub fn ham10000() -> Self {
        Self::new(
            ["nv", "mel", "bkl", "bcc", "akiec", "vasc", "df"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }

    /// Label for a model output index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::ham10000()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ham10000_order_matches_model_output_indices() {
        let labels = LabelSet::ham10000();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels.get(0), Some("nv"));
        assert_eq!(labels.get(6), Some("df"));
        assert_eq!(labels.get(7), None);
    }
}
