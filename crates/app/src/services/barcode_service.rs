//! Barcode service: scan an image and look the products up.

use smartfridge_domain::barcode::BarcodePayload;
use smartfridge_domain::error::{SmartFridgeError, ValidationError};
use smartfridge_domain::product::ScanResult;

use crate::ports::{BarcodeDecoder, ProductCatalog};

/// Decodes barcodes from an image and resolves each against a product
/// catalog, one after the other.
pub struct BarcodeService<D, C> {
    decoder: D,
    catalog: C,
}

impl<D: BarcodeDecoder, C: ProductCatalog> BarcodeService<D, C> {
    /// Create a new service from a decoder and a catalog.
    pub fn new(decoder: D, catalog: C) -> Self {
        Self { decoder, catalog }
    }

    /// Scan `image` and return one result per barcode found.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoBarcodeDetected`] when the image holds no
    /// barcode, a validation error when it is not an image, and the
    /// catalog's error for the first lookup that fails.
    pub async fn scan(&self, image: Vec<u8>) -> Result<Vec<ScanResult>, SmartFridgeError> {
        let barcodes = self.decoder.decode(image).await?;
        if barcodes.is_empty() {
            return Err(ValidationError::NoBarcodeDetected.into());
        }

        let mut results = Vec::with_capacity(barcodes.len());
        for barcode in barcodes {
            let payload = BarcodePayload::parse(&barcode.text);
            let code = payload.lookup_code(&barcode.text);
            tracing::debug!(symbology = %barcode.symbology, %code, "looking up product");
            let product = self.catalog.lookup(code).await?;
            results.push(ScanResult {
                symbology: barcode.symbology,
                payload,
                product,
            });
        }
        Ok(results)
    }
}
