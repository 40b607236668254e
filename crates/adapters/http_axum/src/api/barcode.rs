//! Barcode upload handler.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use smartfridge_app::ports::{BarcodeDecoder, IngredientRepository, ProductCatalog};
use smartfridge_domain::error::ValidationError;
use smartfridge_domain::product::ScanResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct ScanBody {
    pub results: Vec<ScanResult>,
}

/// Possible responses from the scan endpoint.
pub enum ScanResponse {
    Ok(Json<ScanBody>),
}

impl IntoResponse for ScanResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/barcode`: multipart upload with the image in field `file`.
pub async fn scan<IR, BD, PC>(
    State(state): State<AppState<IR, BD, PC>>,
    mut multipart: Multipart,
) -> Result<ScanResponse, ApiError>
where
    IR: IngredientRepository + Send + Sync + 'static,
    BD: BarcodeDecoder + Send + Sync + 'static,
    PC: ProductCatalog + Send + Sync + 'static,
{
    let mut image = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            image = Some(field.bytes().await?.to_vec());
            break;
        }
    }
    let image = image.ok_or(ValidationError::MissingUpload(FILE_FIELD))?;

    let results = state.barcode_service.scan(image).await?;
    Ok(ScanResponse::Ok(Json(ScanBody { results })))
}
