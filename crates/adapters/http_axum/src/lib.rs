//! # smartfridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the ingredient inventory
//!   (`/api/ingredients`, `/api/ingredients/{id}`) and barcode scanning
//!   (`/api/barcode`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and domain errors into HTTP responses
//! - Apply cross-cutting layers: request tracing, CORS, upload size limit
//!
//! ## Dependency rule
//! Depends on `smartfridge-app` (for port traits and services) and
//! `smartfridge-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
