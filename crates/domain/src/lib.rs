//! # smartfridge-domain
//!
//! Pure domain model for the smartfridge ingredient tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Ingredients** (tracked food items) and their embedded **Quantity**
//! - Define **sparse patches** and the field-level merge used by partial updates
//! - Interpret **barcode payloads** (raw or GS1 element strings)
//! - Define the **product projection** returned by barcode lookups
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod barcode;
pub mod ingredient;
pub mod patch;
pub mod product;
