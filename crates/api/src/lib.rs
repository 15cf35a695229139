//! DermaVision API Server
//!
//! REST API for the skin lesion classification service. A single `/predict`
//! endpoint accepts an image upload and returns the predicted lesion class;
//! the model artifact is fetched from the remote store on first use.

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod error;
mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub model_loaded: bool,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict", post(routes::predict::predict))
        .route("/health", get(health_handler))
        // Uploads are unbounded, matching the deployed service; the decode
        // step is the only gate on input size.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model_loaded: state.model_loaded(),
    };

    (StatusCode::OK, Json(response))
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.listen_addr();
    let state = Arc::new(AppState::new(&config));
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use image::{ImageBuffer, Rgb};
    use std::io::Cursor;
    use tower::ServiceExt;

    const BOUNDARY: &str = "dermavision-test-boundary";

    fn test_state(store_endpoint: &str) -> Arc<AppState> {
        let config = ServerConfig {
            store_endpoint: store_endpoint.to_string(),
            ..ServerConfig::default()
        };
        Arc::new(AppState::new(&config))
    }

    fn multipart_body(field_name: &str, data: &[u8]) -> Body {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{field_name}\"; filename=\"upload.png\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        Body::from(body)
    }

    fn predict_request(field_name: &str, data: &[u8]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(multipart_body(field_name, data))
            .unwrap()
    }

    fn png_bytes() -> Vec<u8> {
        let img = ImageBuffer::from_pixel(32, 32, Rgb([120u8, 80, 60]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_image_field_yields_exact_400_body() {
        let app = create_router(test_state("http://127.0.0.1:9"));

        let response = app
            .oneshot(predict_request("photo", &png_bytes()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "No image provided"})
        );
    }

    #[tokio::test]
    async fn failed_model_load_yields_500_and_leaves_handle_unset() {
        // Port 9 is closed, so the first load attempt fails fast.
        let state = test_state("http://127.0.0.1:9");
        let app = create_router(state.clone());

        let response = app
            .oneshot(predict_request("image", &png_bytes()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert!(body.get("error").is_some());
        assert!(!state.model_loaded());
    }

    #[tokio::test]
    async fn health_reports_model_not_loaded() {
        let app = create_router(test_state("http://127.0.0.1:9"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model_loaded"], false);
    }
}
