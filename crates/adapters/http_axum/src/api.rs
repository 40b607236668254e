//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod barcode;
#[allow(clippy::missing_errors_doc)]
pub mod ingredients;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use smartfridge_app::ports::{BarcodeDecoder, IngredientRepository, ProductCatalog};

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// `max_upload_bytes` caps the body size accepted by the barcode upload.
pub fn routes<IR, BD, PC>(max_upload_bytes: usize) -> Router<AppState<IR, BD, PC>>
where
    IR: IngredientRepository + Send + Sync + 'static,
    BD: BarcodeDecoder + Send + Sync + 'static,
    PC: ProductCatalog + Send + Sync + 'static,
{
    Router::new()
        // Ingredients
        .route(
            "/ingredients",
            get(ingredients::list::<IR, BD, PC>).post(ingredients::create::<IR, BD, PC>),
        )
        .route(
            "/ingredients/{id}",
            get(ingredients::get::<IR, BD, PC>)
                .patch(ingredients::update::<IR, BD, PC>)
                .delete(ingredients::delete::<IR, BD, PC>),
        )
        // Barcode
        .route(
            "/barcode",
            post(barcode::scan::<IR, BD, PC>).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}
