//! # smartfridge-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `IngredientRepository`: CRUD and status queries for ingredients
//!   - `BarcodeDecoder`: find barcodes in an uploaded image
//!   - `ProductCatalog`: look products up by barcode in a third-party database
//! - Define **driving/inbound ports** as use-case structs:
//!   - `IngredientService`: create, list, get, patch, delete
//!   - `BarcodeService`: decode, interpret and look up scanned barcodes
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `smartfridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
