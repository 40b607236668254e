//! Storage port: repository trait for ingredient persistence.

use std::future::Future;

use smartfridge_domain::error::SmartFridgeError;
use smartfridge_domain::id::IngredientId;
use smartfridge_domain::ingredient::{Ingredient, IngredientStatus, NewIngredient};

/// Repository for persisting and querying [`Ingredient`]s.
pub trait IngredientRepository {
    /// Store a new ingredient. The store assigns its identity.
    fn create(
        &self,
        ingredient: NewIngredient,
    ) -> impl Future<Output = Result<Ingredient, SmartFridgeError>> + Send;

    /// Get an ingredient by its unique identifier.
    fn get_by_id(
        &self,
        id: IngredientId,
    ) -> impl Future<Output = Result<Option<Ingredient>, SmartFridgeError>> + Send;

    /// Get every stored ingredient, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Ingredient>, SmartFridgeError>> + Send;

    /// Get the ingredients whose status is one of `statuses`.
    ///
    /// Ingredients without a status never match. An empty slice matches
    /// nothing.
    fn find_by_status(
        &self,
        statuses: Vec<IngredientStatus>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, SmartFridgeError>> + Send;

    /// Overwrite a stored ingredient.
    ///
    /// Fails with [`SmartFridgeError::NotFound`] when no record has its id.
    fn update(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, SmartFridgeError>> + Send;

    /// Delete an ingredient by its unique identifier.
    ///
    /// Fails with [`SmartFridgeError::NotFound`] when no record has that id.
    fn delete(&self, id: IngredientId) -> impl Future<Output = Result<(), SmartFridgeError>> + Send;
}
