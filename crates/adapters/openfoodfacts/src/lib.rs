//! # smartfridge-adapter-openfoodfacts
//!
//! Driven adapter implementing the `ProductCatalog` port against the
//! [Open Food Facts](https://world.openfoodfacts.org) product API.
//!
//! A lookup issues `GET {base}/api/v0/product/{code}.json` and projects the
//! answer into [`ProductInfo`](smartfridge_domain::product::ProductInfo).
//! No retries, no caching.

mod client;
mod error;

pub use client::OpenFoodFactsClient;
pub use error::CatalogError;
