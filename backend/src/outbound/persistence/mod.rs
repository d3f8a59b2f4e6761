//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL through `diesel-async` with `bb8` pooling.
//!
//! - **Thin adapters**: repositories translate between rows and entities
//!   and hold no business rules.
//! - **Internal models**: `models.rs` and `schema.rs` never leave this module.
//! - **Typed errors**: every Diesel failure becomes a `RepositoryError`.
//!
//! # Example
//!
//! ```ignore
//! use photos::outbound::persistence::{DbPool, DieselPhotoRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/photos")).await?;
//! let photos = DieselPhotoRepository::new(pool);
//! ```

pub(crate) mod diesel_basic_error_mapping;
mod diesel_helpers;
mod diesel_photo_repository;
mod diesel_snapper_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_photo_repository::DieselPhotoRepository;
pub use diesel_snapper_repository::DieselSnapperRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
