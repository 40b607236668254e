//! Ingredient service: use-cases for managing ingredients.

use std::collections::BTreeSet;

use smartfridge_domain::error::{NotFoundError, SmartFridgeError, ValidationError};
use smartfridge_domain::id::IngredientId;
use smartfridge_domain::ingredient::{Ingredient, IngredientStatus, NewIngredient};
use smartfridge_domain::patch::IngredientPatch;

use crate::ports::IngredientRepository;

/// Application service for ingredient CRUD and partial updates.
pub struct IngredientService<R> {
    repo: R,
}

impl<R: IngredientRepository> IngredientService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new ingredient after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFridgeError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_ingredient(
        &self,
        ingredient: NewIngredient,
    ) -> Result<Ingredient, SmartFridgeError> {
        ingredient.validate()?;
        let created = self.repo.create(ingredient).await?;
        tracing::info!(id = %created.id, name = %created.name, "ingredient created");
        Ok(created)
    }

    /// Look up an ingredient by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFridgeError::NotFound`] when no ingredient with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_ingredient(&self, id: IngredientId) -> Result<Ingredient, SmartFridgeError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all ingredients.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, SmartFridgeError> {
        self.repo.get_all().await
    }

    /// List the ingredients whose status is one of `statuses`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyStatusFilter`] when `statuses` is
    /// empty, or a storage error from the repository.
    pub async fn list_ingredients_by_status(
        &self,
        statuses: &BTreeSet<IngredientStatus>,
    ) -> Result<Vec<Ingredient>, SmartFridgeError> {
        if statuses.is_empty() {
            return Err(ValidationError::EmptyStatusFilter.into());
        }
        self.repo
            .find_by_status(statuses.iter().copied().collect())
            .await
    }

    /// Merge a sparse patch into a stored ingredient and persist the result.
    ///
    /// An empty patch still requires the ingredient to exist and returns it
    /// unchanged without writing.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFridgeError::NotFound`] if the ingredient does not
    /// exist, [`SmartFridgeError::Validation`] if the merged record breaks an
    /// invariant, or a storage error from the repository.
    pub async fn update_ingredient(
        &self,
        id: IngredientId,
        patch: IngredientPatch,
    ) -> Result<Ingredient, SmartFridgeError> {
        let mut ingredient = self.get_ingredient(id).await?;
        if patch.is_empty() {
            tracing::debug!(%id, "empty patch, nothing to write");
            return Ok(ingredient);
        }
        ingredient.apply_patch(patch)?;
        self.repo.update(ingredient).await
    }

    /// Delete an ingredient by id.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFridgeError::NotFound`] if the ingredient does not
    /// exist, or a storage error from the repository.
    pub async fn delete_ingredient(&self, id: IngredientId) -> Result<(), SmartFridgeError> {
        self.repo.delete(id).await?;
        tracing::info!(%id, "ingredient deleted");
        Ok(())
    }
}

fn not_found(id: IngredientId) -> SmartFridgeError {
    NotFoundError {
        entity: "Ingredient",
        id: id.to_string(),
    }
    .into()
}
