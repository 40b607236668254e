//! HTTP client for the Open Food Facts v0 product endpoint.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use smartfridge_app::ports::ProductCatalog;
use smartfridge_domain::error::{NotFoundError, SmartFridgeError};
use smartfridge_domain::product::ProductInfo;

use crate::error::CatalogError;

const USER_AGENT: &str = concat!("smartfridge/", env!("CARGO_PKG_VERSION"));

/// [`ProductCatalog`] backed by the Open Food Facts HTTP API.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl OpenFoodFactsClient {
    /// Create a client for the catalog at `base_url`
    /// (e.g. `https://world.openfoodfacts.org`).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::CannotBeABase(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, base_url })
    }

    fn product_url(&self, code: &str) -> Result<Url, CatalogError> {
        let file = format!("{code}.json");
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "v0", "product", file.as_str()]);
        Ok(url)
    }

    /// Fetch the raw catalog document. `None` when the catalog does not
    /// know the code.
    async fn fetch(&self, code: &str) -> Result<Option<Value>, CatalogError> {
        let url = self.product_url(code)?;
        tracing::debug!(%url, "querying product catalog");

        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: Value = response.error_for_status()?.json().await?;
        if body.get("status").and_then(Value::as_i64) == Some(0) {
            return Ok(None);
        }
        Ok(Some(body))
    }
}

impl ProductCatalog for OpenFoodFactsClient {
    async fn lookup(&self, code: &str) -> Result<ProductInfo, SmartFridgeError> {
        match self.fetch(code).await? {
            Some(body) => Ok(project(&body)),
            None => {
                tracing::info!(code, "product not in catalog");
                Err(NotFoundError {
                    entity: "Product",
                    id: code.to_string(),
                }
                .into())
            }
        }
    }
}

/// Pick the fixed field set out of a catalog document.
fn project(body: &Value) -> ProductInfo {
    ProductInfo {
        barcode: text_at(body, "/product/code"),
        product_name: text_at(body, "/product/product_name_en"),
        brands: text_at(body, "/product/brands"),
        countries: text_at(body, "/product/countries"),
        allergens: text_at(body, "/product/allergens"),
        keywords: body
            .pointer("/product/_keywords")
            .and_then(Value::as_array)
            .map(|words| {
                words
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            }),
        energy_kcal: number_at(body, "/product/nutriments/energy-kcal"),
        fat: number_at(body, "/product/nutriments/fat"),
        sugars: number_at(body, "/product/nutriments/sugars"),
        fiber: number_at(body, "/product/nutriments/fiber"),
        proteins: number_at(body, "/product/nutriments/proteins"),
        salt: number_at(body, "/product/nutriments/salt"),
        nutriscore_grade: text_at(body, "/product/nutriscore_grade"),
        ecoscore_grade: text_at(body, "/product/ecoscore_grade"),
    }
}

fn text_at(body: &Value, pointer: &str) -> Option<String> {
    body.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

// Nutriments occasionally arrive as strings.
fn number_at(body: &Value, pointer: &str) -> Option<f64> {
    match body.pointer(pointer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
