//! rxing-backed barcode decoder.

use rxing::Exceptions;

use smartfridge_app::ports::BarcodeDecoder;
use smartfridge_domain::barcode::DecodedBarcode;
use smartfridge_domain::error::SmartFridgeError;

use crate::error::DecodeError;

/// Finds every barcode in an uploaded image.
#[derive(Debug, Clone, Copy, Default)]
pub struct RxingBarcodeDecoder;

impl RxingBarcodeDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BarcodeDecoder for RxingBarcodeDecoder {
    async fn decode(&self, image: Vec<u8>) -> Result<Vec<DecodedBarcode>, SmartFridgeError> {
        let found = tokio::task::spawn_blocking(move || detect(&image))
            .await
            .map_err(DecodeError::from)??;
        tracing::debug!(count = found.len(), "decoded barcodes");
        Ok(found)
    }
}

fn detect(image: &[u8]) -> Result<Vec<DecodedBarcode>, DecodeError> {
    let luma = image::load_from_memory(image)?.to_luma8();
    let (width, height) = luma.dimensions();

    match rxing::helpers::detect_multiple_in_luma(luma.into_raw(), width, height) {
        Ok(results) => Ok(results
            .iter()
            .map(|result| DecodedBarcode {
                symbology: format!("{:?}", result.getBarcodeFormat()),
                text: result.getText().to_string(),
            })
            .collect()),
        Err(Exceptions::NotFoundException(_)) => Ok(Vec::new()),
        Err(err) => Err(DecodeError::Detection(err.to_string())),
    }
}
