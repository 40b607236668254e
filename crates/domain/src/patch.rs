//! Sparse patches for partial ingredient updates.
//!
//! Each field carries a tri-state [`Patch`] so that a field left out of the
//! payload and a field sent as `null` stay distinguishable. Both leave the
//! stored value untouched; only [`Patch::Value`] overwrites.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::error::SmartFridgeError;
use crate::ingredient::{Ingredient, IngredientStatus, Quantity, QuantityUnit};

/// A single field of a sparse patch.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    /// The field was not part of the payload.
    Absent,
    /// The field was present with an explicit `null`.
    Null,
    Value(T),
}

impl<T> Patch<T> {
    /// Whether this field carries a value to apply.
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    fn apply_to(self, target: &mut T) {
        if let Self::Value(value) = self {
            *target = value;
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

// Only invoked when the key is present; missing keys fall back to `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Value))
    }
}

/// Sparse patch of the embedded [`Quantity`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuantityPatch {
    pub value: Patch<f64>,
    pub unit: Patch<QuantityUnit>,
}

impl QuantityPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.value.is_value() && !self.unit.is_value()
    }

    fn apply_to(self, quantity: &mut Quantity) {
        self.value.apply_to(&mut quantity.value);
        self.unit.apply_to(&mut quantity.unit);
    }
}

/// Sparse patch of an [`Ingredient`]. Unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct IngredientPatch {
    pub name: Patch<String>,
    pub quantity: Patch<QuantityPatch>,
    pub opened_date: Patch<NaiveDate>,
    pub expiry_date: Patch<NaiveDate>,
    pub status: Patch<IngredientStatus>,
    pub tags: Patch<Vec<String>>,
}

impl IngredientPatch {
    /// Whether applying this patch would leave any ingredient unchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.name.is_value()
            && self.quantity.as_value().is_none_or(QuantityPatch::is_empty)
            && !self.opened_date.is_value()
            && !self.expiry_date.is_value()
            && !self.status.is_value()
            && !self.tags.is_value()
    }
}

impl Ingredient {
    /// Merge `patch` into this ingredient field by field, then re-check
    /// invariants.
    ///
    /// `quantity` merges per sub-field: a patch carrying only `unit` keeps
    /// the stored `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFridgeError::Validation`] if the merged ingredient
    /// breaks an invariant (blank name, non-finite quantity). `self` is left
    /// untouched in that case.
    pub fn apply_patch(&mut self, patch: IngredientPatch) -> Result<(), SmartFridgeError> {
        let mut merged = self.clone();
        patch.name.apply_to(&mut merged.name);
        if let Some(quantity) = patch.quantity.into_value() {
            quantity.apply_to(&mut merged.quantity);
        }
        if let Some(date) = patch.opened_date.into_value() {
            merged.opened_date = Some(date);
        }
        patch.expiry_date.apply_to(&mut merged.expiry_date);
        if let Some(status) = patch.status.into_value() {
            merged.status = Some(status);
        }
        patch.tags.apply_to(&mut merged.tags);

        merged.validate()?;
        *self = merged;
        Ok(())
    }
}
