//! DermaVision Inference Service - Main Entry Point

use api::{init_logging, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== DermaVision Inference Service v{} ===", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env();
    info!(
        "Model artifact: bucket={}, object={}",
        config.model_bucket, config.model_object
    );

    run_server(config).await?;

    Ok(())
}
