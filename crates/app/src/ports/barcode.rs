//! Barcode port: turns an uploaded image into barcode payloads.

use std::future::Future;

use smartfridge_domain::barcode::DecodedBarcode;
use smartfridge_domain::error::SmartFridgeError;

/// Finds barcodes in an encoded image (PNG, JPEG, …).
pub trait BarcodeDecoder {
    /// Decode every barcode visible in `image`.
    ///
    /// Returns an empty list when the image is readable but holds no
    /// barcode, and a validation error when the bytes are not an image.
    fn decode(
        &self,
        image: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<DecodedBarcode>, SmartFridgeError>> + Send;
}
