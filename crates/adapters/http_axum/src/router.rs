//! Axum router assembly.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use smartfridge_app::ports::{BarcodeDecoder, IngredientRepository, ProductCatalog};

use crate::state::AppState;

/// Transport settings for the HTTP adapter.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Browser origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
    /// Largest accepted barcode upload, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:5173".to_string()],
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem,
/// and a [`CorsLayer`] for the configured origins.
pub fn build<IR, BD, PC>(state: AppState<IR, BD, PC>, config: &HttpConfig) -> Router
where
    IR: IngredientRepository + Send + Sync + 'static,
    BD: BarcodeDecoder + Send + Sync + 'static,
    PC: ProductCatalog + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes(config.max_upload_bytes))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to smartfridge" }))
}

async fn health_check() -> &'static str {
    "OK"
}
