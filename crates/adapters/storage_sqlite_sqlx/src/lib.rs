//! # homelist-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `homelist-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create and drop the `homes` table (sqlx embedded, reversible migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `homelist-app` (for port traits) and `homelist-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod home_repo;
mod pool;

pub use error::StorageError;
pub use home_repo::SqliteHomeRepository;
pub use pool::{Config, Database};
