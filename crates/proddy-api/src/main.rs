//! Proddy API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p proddy-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use proddy_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Tracing needs the environment before the full config is validated
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Proddy API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    proddy_api::run(config).await?;

    Ok(())
}
