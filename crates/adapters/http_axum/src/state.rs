//! Shared application state for axum handlers.

use std::sync::Arc;

use smartfridge_app::ports::{BarcodeDecoder, IngredientRepository, ProductCatalog};
use smartfridge_app::services::barcode_service::BarcodeService;
use smartfridge_app::services::ingredient_service::IngredientService;

/// Application state shared across all axum handlers.
///
/// Generic over the ingredient repository, barcode decoder and product
/// catalog to avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone`; only the `Arc`
/// wrappers are cloned.
pub struct AppState<IR, BD, PC> {
    /// Ingredient CRUD service.
    pub ingredient_service: Arc<IngredientService<IR>>,
    /// Barcode scan + product lookup service.
    pub barcode_service: Arc<BarcodeService<BD, PC>>,
}

impl<IR, BD, PC> Clone for AppState<IR, BD, PC> {
    fn clone(&self) -> Self {
        Self {
            ingredient_service: Arc::clone(&self.ingredient_service),
            barcode_service: Arc::clone(&self.barcode_service),
        }
    }
}

impl<IR, BD, PC> AppState<IR, BD, PC>
where
    IR: IngredientRepository + Send + Sync + 'static,
    BD: BarcodeDecoder + Send + Sync + 'static,
    PC: ProductCatalog + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        ingredient_service: IngredientService<IR>,
        barcode_service: BarcodeService<BD, PC>,
    ) -> Self {
        Self {
            ingredient_service: Arc::new(ingredient_service),
            barcode_service: Arc::new(barcode_service),
        }
    }
}
