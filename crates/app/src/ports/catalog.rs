//! Catalog port: third-party product database lookups.

use std::future::Future;

use smartfridge_domain::error::SmartFridgeError;
use smartfridge_domain::product::ProductInfo;

/// A product database keyed by barcode (EAN/GTIN).
pub trait ProductCatalog {
    /// Look a product up by its code.
    ///
    /// Fails with [`SmartFridgeError::NotFound`] when the catalog does not
    /// know the code and [`SmartFridgeError::Upstream`] when the catalog
    /// itself fails.
    fn lookup(&self, code: &str)
    -> impl Future<Output = Result<ProductInfo, SmartFridgeError>> + Send;
}
