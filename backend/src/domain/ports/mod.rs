//! Repository ports at the hexagonal boundary.
//!
//! Domain services depend only on these traits; the Diesel and in-memory
//! adapters under `outbound` implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod acronym_repository;
mod category_repository;
mod user_repository;

#[cfg(test)]
pub use acronym_repository::MockAcronymRepository;
pub use acronym_repository::{AcronymRepository, AcronymRepositoryError};
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
