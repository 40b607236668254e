//! `SQLite` implementation of [`IngredientRepository`].

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use smartfridge_app::ports::IngredientRepository;
use smartfridge_domain::error::{NotFoundError, SmartFridgeError};
use smartfridge_domain::id::IngredientId;
use smartfridge_domain::ingredient::{
    Ingredient, IngredientStatus, NewIngredient, Quantity, QuantityUnit,
};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Ingredient);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Ingredient> {
        value.map(|w| w.0)
    }

    fn all(values: Vec<Self>) -> Vec<Ingredient> {
        values.into_iter().map(|w| w.0).collect()
    }
}

fn decode_err<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let quantity_value: f64 = row.try_get("quantity_value")?;
        let quantity_unit: String = row.try_get("quantity_unit")?;
        let opened_date: Option<String> = row.try_get("opened_date")?;
        let expiry_date: String = row.try_get("expiry_date")?;
        let status: Option<String> = row.try_get("status")?;
        let tags_json: String = row.try_get("tags")?;

        let id = IngredientId::from_str(&id).map_err(decode_err)?;
        let unit = QuantityUnit::from_str(&quantity_unit).map_err(decode_err)?;
        let opened_date = opened_date
            .map(|s| NaiveDate::from_str(&s))
            .transpose()
            .map_err(decode_err)?;
        let expiry_date = NaiveDate::from_str(&expiry_date).map_err(decode_err)?;
        let status = status
            .map(|s| IngredientStatus::from_str(&s))
            .transpose()
            .map_err(decode_err)?;
        let tags: Vec<String> = serde_json::from_str(&tags_json).map_err(decode_err)?;

        Ok(Self(Ingredient {
            id,
            name,
            quantity: Quantity::new(quantity_value, unit),
            opened_date,
            expiry_date,
            status,
            tags,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO ingredients (id, name, quantity_value, quantity_unit, opened_date, expiry_date, status, tags)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM ingredients WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM ingredients";
const SELECT_BY_STATUS: &str = "SELECT * FROM ingredients WHERE status = ?";

const UPDATE: &str = r"
    UPDATE ingredients
    SET name = ?, quantity_value = ?, quantity_unit = ?, opened_date = ?, expiry_date = ?,
        status = ?, tags = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM ingredients WHERE id = ?";

fn not_found(id: IngredientId) -> SmartFridgeError {
    NotFoundError {
        entity: "Ingredient",
        id: id.to_string(),
    }
    .into()
}

/// `SQLite`-backed ingredient repository.
pub struct SqliteIngredientRepository {
    pool: SqlitePool,
}

impl SqliteIngredientRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl IngredientRepository for SqliteIngredientRepository {
    async fn create(&self, ingredient: NewIngredient) -> Result<Ingredient, SmartFridgeError> {
        let ingredient = ingredient.with_id(IngredientId::new());
        let tags_json = serde_json::to_string(&ingredient.tags).map_err(StorageError::from)?;

        sqlx::query(INSERT)
            .bind(ingredient.id.to_string())
            .bind(&ingredient.name)
            .bind(ingredient.quantity.value)
            .bind(ingredient.quantity.unit.as_str())
            .bind(ingredient.opened_date.map(|d| d.to_string()))
            .bind(ingredient.expiry_date.to_string())
            .bind(ingredient.status.map(IngredientStatus::as_str))
            .bind(&tags_json)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(ingredient)
    }

    async fn get_by_id(&self, id: IngredientId) -> Result<Option<Ingredient>, SmartFridgeError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Ingredient>, SmartFridgeError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::all(rows))
    }

    async fn find_by_status(
        &self,
        statuses: Vec<IngredientStatus>,
    ) -> Result<Vec<Ingredient>, SmartFridgeError> {
        let rows: Vec<Wrapper> = match statuses.as_slice() {
            [] => Vec::new(),
            [status] => sqlx::query_as(SELECT_BY_STATUS)
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(StorageError::from)?,
            many => {
                let mut builder =
                    QueryBuilder::<Sqlite>::new("SELECT * FROM ingredients WHERE status IN (");
                let mut separated = builder.separated(", ");
                for status in many {
                    separated.push_bind(status.as_str());
                }
                separated.push_unseparated(")");
                builder
                    .build_query_as::<Wrapper>()
                    .fetch_all(&self.pool)
                    .await
                    .map_err(StorageError::from)?
            }
        };

        Ok(Wrapper::all(rows))
    }

    async fn update(&self, ingredient: Ingredient) -> Result<Ingredient, SmartFridgeError> {
        let tags_json = serde_json::to_string(&ingredient.tags).map_err(StorageError::from)?;

        let result = sqlx::query(UPDATE)
            .bind(&ingredient.name)
            .bind(ingredient.quantity.value)
            .bind(ingredient.quantity.unit.as_str())
            .bind(ingredient.opened_date.map(|d| d.to_string()))
            .bind(ingredient.expiry_date.to_string())
            .bind(ingredient.status.map(IngredientStatus::as_str))
            .bind(&tags_json)
            .bind(ingredient.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(not_found(ingredient.id));
        }
        Ok(ingredient)
    }

    async fn delete(&self, id: IngredientId) -> Result<(), SmartFridgeError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
