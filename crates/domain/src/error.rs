//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SmartFridgeError`] via `From`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum SmartFridgeError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),

    #[error("upstream error")]
    Upstream(Box<dyn std::error::Error + Send + Sync>),

    #[error("internal error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

/// Malformed or missing input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("quantity value must be a finite number")]
    NonFiniteQuantity,

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("invalid ingredient status: {0}")]
    InvalidStatus(String),

    #[error("status filter must contain at least one status")]
    EmptyStatusFilter,

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("missing upload field: {0}")]
    MissingUpload(&'static str),

    #[error("unreadable image: {0}")]
    UnreadableImage(String),

    #[error("No barcode detected")]
    NoBarcodeDetected,
}

/// An identifier did not resolve to a stored record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl SmartFridgeError {
    /// Wrap an adapter error as a storage failure.
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }

    /// Wrap an adapter error as an upstream (third-party service) failure.
    pub fn upstream<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Upstream(Box::new(err))
    }

    /// Wrap an unexpected adapter failure that is neither storage nor
    /// upstream.
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}
