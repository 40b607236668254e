//! JSON REST handlers for ingredients.

use std::collections::BTreeSet;
use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use smartfridge_app::ports::{BarcodeDecoder, IngredientRepository, ProductCatalog};
use smartfridge_domain::error::ValidationError;
use smartfridge_domain::id::IngredientId;
use smartfridge_domain::ingredient::{Ingredient, IngredientStatus, NewIngredient, Quantity};
use smartfridge_domain::patch::IngredientPatch;

use crate::error::ApiError;
use crate::state::AppState;

/// Query keys accepted as status filters. `ingredient_status` is kept for
/// older clients.
const STATUS_KEYS: [&str; 2] = ["status", "ingredient_status"];

/// Request body for creating an ingredient.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientRequest {
    pub name: String,
    pub quantity: Quantity,
    #[serde(default)]
    pub opened_date: Option<NaiveDate>,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub status: Option<IngredientStatus>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Acknowledgment body for mutations that do not echo the resource.
#[derive(Serialize)]
pub struct Ack {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<IngredientId>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Ingredient>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Ingredient>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Ack>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<Ack>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<IngredientId, ApiError> {
    IngredientId::from_str(id).map_err(ApiError::from)
}

/// Collect the status filter from query pairs. Values may repeat and may be
/// comma-separated. `None` means no filter was given.
fn parse_status_filter(
    params: &[(String, String)],
) -> Result<Option<BTreeSet<IngredientStatus>>, ValidationError> {
    let mut values = params
        .iter()
        .filter(|(key, _)| STATUS_KEYS.contains(&key.as_str()))
        .map(|(_, value)| value)
        .peekable();
    if values.peek().is_none() {
        return Ok(None);
    }

    let mut statuses = BTreeSet::new();
    for value in values {
        for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            statuses.insert(IngredientStatus::from_str(part)?);
        }
    }
    Ok(Some(statuses))
}

/// `GET /api/ingredients[?status=expired&status=close_to_expire]`
pub async fn list<IR, BD, PC>(
    State(state): State<AppState<IR, BD, PC>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<ListResponse, ApiError>
where
    IR: IngredientRepository + Send + Sync + 'static,
    BD: BarcodeDecoder + Send + Sync + 'static,
    PC: ProductCatalog + Send + Sync + 'static,
{
    let ingredients = match parse_status_filter(&params)? {
        None => state.ingredient_service.list_ingredients().await?,
        Some(statuses) => {
            state
                .ingredient_service
                .list_ingredients_by_status(&statuses)
                .await?
        }
    };
    Ok(ListResponse::Ok(Json(ingredients)))
}

/// `GET /api/ingredients/:id`
pub async fn get<IR, BD, PC>(
    State(state): State<AppState<IR, BD, PC>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    IR: IngredientRepository + Send + Sync + 'static,
    BD: BarcodeDecoder + Send + Sync + 'static,
    PC: ProductCatalog + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let ingredient = state.ingredient_service.get_ingredient(id).await?;
    Ok(GetResponse::Ok(Json(ingredient)))
}

/// `POST /api/ingredients`
pub async fn create<IR, BD, PC>(
    State(state): State<AppState<IR, BD, PC>>,
    payload: Result<Json<CreateIngredientRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    IR: IngredientRepository + Send + Sync + 'static,
    BD: BarcodeDecoder + Send + Sync + 'static,
    PC: ProductCatalog + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = NewIngredient::builder()
        .name(req.name)
        .quantity(req.quantity)
        .expiry_date(req.expiry_date)
        .tags(req.tags.unwrap_or_default());
    if let Some(opened_date) = req.opened_date {
        builder = builder.opened_date(opened_date);
    }
    if let Some(status) = req.status {
        builder = builder.status(status);
    }

    let created = state
        .ingredient_service
        .create_ingredient(builder.build()?)
        .await?;
    Ok(CreateResponse::Created(Json(Ack {
        message: "Ingredient added successfully".to_string(),
        id: Some(created.id),
    })))
}

/// `PATCH /api/ingredients/:id`
pub async fn update<IR, BD, PC>(
    State(state): State<AppState<IR, BD, PC>>,
    Path(id): Path<String>,
    payload: Result<Json<IngredientPatch>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    IR: IngredientRepository + Send + Sync + 'static,
    BD: BarcodeDecoder + Send + Sync + 'static,
    PC: ProductCatalog + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let Json(patch) = payload?;
    let updated = state.ingredient_service.update_ingredient(id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/ingredients/:id`
pub async fn delete<IR, BD, PC>(
    State(state): State<AppState<IR, BD, PC>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    IR: IngredientRepository + Send + Sync + 'static,
    BD: BarcodeDecoder + Send + Sync + 'static,
    PC: ProductCatalog + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.ingredient_service.delete_ingredient(id).await?;
    Ok(DeleteResponse::Ok(Json(Ack {
        message: format!("Ingredient with id {id} deleted successfully"),
        id: None,
    })))
}
