//! Catalog-specific error type wrapping HTTP client errors.

use smartfridge_domain::error::SmartFridgeError;

/// Errors originating from the Open Food Facts client.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The request failed or the catalog answered with an error status.
    #[error("catalog request failed")]
    Http(#[from] reqwest::Error),

    /// The configured base URL does not parse.
    #[error("invalid catalog base URL")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry a path (e.g. `data:` URLs).
    #[error("catalog base URL cannot be a base: {0}")]
    CannotBeABase(String),
}

impl From<CatalogError> for SmartFridgeError {
    fn from(err: CatalogError) -> Self {
        Self::upstream(err)
    }
}
