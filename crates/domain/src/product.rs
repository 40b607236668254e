//! Product facts projected from a third-party catalog.

use serde::{Deserialize, Serialize};

use crate::barcode::BarcodePayload;

/// Fixed projection of a catalog product. Fields the catalog does not
/// provide stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub barcode: Option<String>,
    pub product_name: Option<String>,
    pub brands: Option<String>,
    pub countries: Option<String>,
    pub allergens: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub energy_kcal: Option<f64>,
    pub fat: Option<f64>,
    pub sugars: Option<f64>,
    pub fiber: Option<f64>,
    pub proteins: Option<f64>,
    pub salt: Option<f64>,
    pub nutriscore_grade: Option<String>,
    pub ecoscore_grade: Option<String>,
}

/// One barcode found in a scanned image together with its product facts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    #[serde(rename = "type")]
    pub symbology: String,
    pub payload: BarcodePayload,
    #[serde(rename = "data")]
    pub product: ProductInfo,
}
