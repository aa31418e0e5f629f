//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and the schema (`schema.rs`) stay private
//! to this module; connections come from a `bb8` pool through `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use acronyms::outbound::persistence::{DbPool, DieselAcronymRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/vapor")).await?;
//! let repo = DieselAcronymRepository::new(pool);
//! ```

mod diesel_acronym_repository;
mod diesel_category_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_acronym_repository::DieselAcronymRepository;
pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
