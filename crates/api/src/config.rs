//! Environment-driven server configuration

use classifier::DEFAULT_CONFIDENCE_THRESHOLD;
use model_store::GCS_ENDPOINT;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port (`PORT`)
    pub port: u16,
    /// Bucket holding the model artifact (`MODEL_BUCKET`)
    pub model_bucket: String,
    /// Object path of the model artifact (`MODEL_OBJECT`)
    pub model_object: String,
    /// Object store endpoint (`MODEL_STORE_ENDPOINT`)
    pub store_endpoint: String,
    /// Minimum confidence before falling back to the "normal" label
    pub confidence_threshold: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            model_bucket: "dermavision-model-bucket".to_string(),
            model_object: "model_unquant.onnx".to_string(),
            store_endpoint: GCS_ENDPOINT.to_string(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            model_bucket: std::env::var("MODEL_BUCKET").unwrap_or(defaults.model_bucket),
            model_object: std::env::var("MODEL_OBJECT").unwrap_or(defaults.model_object),
            store_endpoint: std::env::var("MODEL_STORE_ENDPOINT")
                .unwrap_or(defaults.store_endpoint),
            confidence_threshold: defaults.confidence_threshold,
        }
    }

    /// Socket address string for the listener
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.model_bucket, "dermavision-model-bucket");
        assert_eq!(config.confidence_threshold, 0.75);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }
}
