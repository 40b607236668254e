//! Decoder-specific error type.

use smartfridge_domain::error::{SmartFridgeError, ValidationError};

/// Errors raised while decoding an uploaded image.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The upload is not an image in a supported format.
    #[error("unreadable image")]
    Image(#[from] image::ImageError),

    /// The barcode reader failed for a reason other than "nothing found".
    #[error("barcode detection failed: {0}")]
    Detection(String),

    /// The blocking decode task panicked or was cancelled.
    #[error("decode task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl From<DecodeError> for SmartFridgeError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Image(err) => ValidationError::UnreadableImage(err.to_string()).into(),
            other => Self::internal(other),
        }
    }
}
