//! # smartfridged: smartfridge daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`smartfridge.toml`, env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository, barcode decoder and catalog client (adapters)
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use smartfridge_adapter_barcode_rxing::RxingBarcodeDecoder;
use smartfridge_adapter_http_axum::router::{self, HttpConfig};
use smartfridge_adapter_http_axum::state::AppState;
use smartfridge_adapter_openfoodfacts::OpenFoodFactsClient;
use smartfridge_adapter_storage_sqlite_sqlx::SqliteIngredientRepository;
use smartfridge_app::services::barcode_service::BarcodeService;
use smartfridge_app::services::ingredient_service::IngredientService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = smartfridge_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Adapters
    let ingredient_repo = SqliteIngredientRepository::new(db.pool().clone());
    let decoder = RxingBarcodeDecoder::new();
    let catalog = OpenFoodFactsClient::new(&config.catalog.base_url, config.catalog_timeout())?;

    // Services
    let state = AppState::new(
        IngredientService::new(ingredient_repo),
        BarcodeService::new(decoder, catalog),
    );

    // HTTP
    let app = router::build(
        state,
        &HttpConfig {
            allowed_origins: config.server.allowed_origins.clone(),
            max_upload_bytes: config.server.max_upload_bytes,
        },
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "smartfridged listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("smartfridged stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
