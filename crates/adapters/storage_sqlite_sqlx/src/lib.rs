//! # smartfridge-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `smartfridge-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the schema on startup (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `smartfridge-app` (for port traits) and `smartfridge-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod ingredient_repo;
mod pool;

pub use error::StorageError;
pub use ingredient_repo::SqliteIngredientRepository;
pub use pool::{Config, Database};
