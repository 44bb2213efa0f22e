//! # hobbyhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hobbyhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `hobbyhub-app` (for port traits) and `hobbyhub-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod error;
mod hobby_repo;
mod pool;
mod user_repo;

pub use error::StorageError;
pub use hobby_repo::SqliteHobbyRepository;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
