//! Ingredient: a tracked food item with quantity, dates, status and tags.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SmartFridgeError, ValidationError};
use crate::id::IngredientId;

/// Unit a [`Quantity`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuantityUnit {
    Pieces,
    Kg,
}

impl QuantityUnit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pieces => "PIECES",
            Self::Kg => "KG",
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PIECES" => Ok(Self::Pieces),
            "KG" => Ok(Self::Kg),
            other => Err(ValidationError::MalformedPayload(format!(
                "unknown quantity unit {other:?}"
            ))),
        }
    }
}

/// Amount of an ingredient. Embedded in its owner, never shared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: QuantityUnit,
}

impl Quantity {
    #[must_use]
    pub fn new(value: f64, unit: QuantityUnit) -> Self {
        Self { value, unit }
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteQuantity`] for `NaN` or infinite values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.value.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::NonFiniteQuantity)
        }
    }
}

/// Advisory expiry status. Never derived from the expiry date here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IngredientStatus {
    Expired,
    NotExpired,
    CloseToExpire,
}

impl IngredientStatus {
    pub const ALL: [Self; 3] = [Self::Expired, Self::NotExpired, Self::CloseToExpire];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::NotExpired => "not_expired",
            Self::CloseToExpire => "close_to_expire",
        }
    }
}

impl fmt::Display for IngredientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IngredientStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidStatus(s.to_string()))
    }
}

/// A stored ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub quantity: Quantity,
    #[serde(default)]
    pub opened_date: Option<NaiveDate>,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub status: Option<IngredientStatus>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Ingredient {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFridgeError::Validation`] when `name` is blank or the
    /// quantity value is not finite.
    pub fn validate(&self) -> Result<(), SmartFridgeError> {
        validate_fields(&self.name, &self.quantity)
    }
}

/// An ingredient that has not been stored yet, hence has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIngredient {
    pub name: String,
    pub quantity: Quantity,
    pub opened_date: Option<NaiveDate>,
    pub expiry_date: NaiveDate,
    pub status: Option<IngredientStatus>,
    pub tags: Vec<String>,
}

impl NewIngredient {
    /// Create a builder for constructing a [`NewIngredient`].
    #[must_use]
    pub fn builder() -> NewIngredientBuilder {
        NewIngredientBuilder::default()
    }

    /// # Errors
    ///
    /// Same rules as [`Ingredient::validate`].
    pub fn validate(&self) -> Result<(), SmartFridgeError> {
        validate_fields(&self.name, &self.quantity)
    }

    /// Attach the identity assigned by the store.
    #[must_use]
    pub fn with_id(self, id: IngredientId) -> Ingredient {
        Ingredient {
            id,
            name: self.name,
            quantity: self.quantity,
            opened_date: self.opened_date,
            expiry_date: self.expiry_date,
            status: self.status,
            tags: self.tags,
        }
    }
}

fn validate_fields(name: &str, quantity: &Quantity) -> Result<(), SmartFridgeError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    quantity.validate()?;
    Ok(())
}

/// Step-by-step builder for [`NewIngredient`].
#[derive(Debug, Default)]
pub struct NewIngredientBuilder {
    name: Option<String>,
    quantity: Option<Quantity>,
    opened_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
    status: Option<IngredientStatus>,
    tags: Vec<String>,
}

impl NewIngredientBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn opened_date(mut self, date: NaiveDate) -> Self {
        self.opened_date = Some(date);
        self
    }

    #[must_use]
    pub fn expiry_date(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    #[must_use]
    pub fn status(mut self, status: IngredientStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Consume the builder, validate, and return a [`NewIngredient`].
    ///
    /// # Errors
    ///
    /// Returns [`SmartFridgeError::Validation`] if a required field is
    /// missing or an invariant fails.
    pub fn build(self) -> Result<NewIngredient, SmartFridgeError> {
        let quantity = self
            .quantity
            .ok_or(ValidationError::MalformedPayload("missing quantity".into()))?;
        let expiry_date = self
            .expiry_date
            .ok_or(ValidationError::MalformedPayload("missing expiryDate".into()))?;
        let ingredient = NewIngredient {
            name: self.name.unwrap_or_default(),
            quantity,
            opened_date: self.opened_date,
            expiry_date,
            status: self.status,
            tags: self.tags,
        };
        ingredient.validate()?;
        Ok(ingredient)
    }
}
