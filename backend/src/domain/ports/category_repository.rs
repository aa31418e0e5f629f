//! Port for category persistence.

use async_trait::async_trait;

use crate::domain::{Acronym, Category, CategoryDraft, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "category repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "category repository query failed: {message}",
    }
}

/// Storage of categories and traversal to the acronyms tagged with them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, ordered by id.
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Fetch a category by identifier.
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError>;

    /// Insert a category and return it with its assigned id.
    async fn create(&self, draft: &CategoryDraft) -> Result<Category, CategoryRepositoryError>;

    /// Delete `id` and its acronym links. Returns `false` when `id` does not exist.
    async fn delete(&self, id: CategoryId) -> Result<bool, CategoryRepositoryError>;

    /// Acronyms tagged with `id`, ordered by acronym id.
    async fn acronyms_of(&self, id: CategoryId) -> Result<Vec<Acronym>, CategoryRepositoryError>;
}
