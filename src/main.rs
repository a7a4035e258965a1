//! Car price estimation server
//!
//! Loads the regression model once and serves `POST /api/predict`.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=model_mobil.json PORT=5000 cargo run --bin carprice
//! ```
//!
//! # Environment Variables
//! - `HOST` / `PORT` - Bind address (default: 127.0.0.1:5000)
//! - `WORKERS` - Worker threads (default: number of CPUs)
//! - `MODEL_PATH` - Model artifact, relative to the executable (default: model_mobil.json)
//! - `STATUS_CODE_POLICY` - `strict` or `legacy` (default: strict)
//! - `OBSERVABILITY_ENABLED` - Expose `/metrics` (default: true)

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use carprice::application::ml::load_predictor;
use carprice::application::pricing::PricingService;
use carprice::config::Config;
use carprice::infrastructure::observability::Metrics;
use carprice::interfaces::http::{self, HttpState};
use tracing::info;
use tracing_subscriber::prelude::*;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Setup logging (stdout only)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.observability.log_filter))
        .with(stdout_layer)
        .init();

    info!("Car price server {} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: Bind={}, Workers={}, Policy={:?}",
        config.server.bind_address(),
        config.server.workers,
        config.server.status_code_policy
    );

    // The service never starts without a model
    let predictor = load_predictor(&config.model.model_path)
        .with_context(|| format!("Cannot start without model {:?}", config.model.model_path))?;

    let mut service = PricingService::new(predictor);
    if config.observability.enabled {
        service = service.with_metrics(Metrics::new()?);
        info!("Metrics exposed on /metrics");
    } else {
        info!("Metrics reporting disabled.");
    }

    let model = service.model_info();
    info!(
        "Model ready: {} ({}, version {}) from {}",
        model.name, model.algorithm, model.version, model.path
    );

    let state = HttpState::new(
        service,
        config.server.status_code_policy,
        config.server.json_limit_bytes,
    );
    let bind_address = config.server.bind_address();

    info!("Server listening on http://{}", bind_address);
    info!("   GET  /             - Health check");
    info!("   POST /api/predict  - Price estimate");
    info!("   GET  /api/model    - Model information");

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(http::cors())
            .configure(move |cfg| state.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await?;

    info!("Shutdown complete.");
    Ok(())
}
