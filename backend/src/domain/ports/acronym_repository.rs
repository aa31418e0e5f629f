//! Port for acronym persistence, including the acronym/category pivot.

use async_trait::async_trait;

use crate::domain::{Acronym, AcronymDraft, AcronymId, Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by acronym repository adapters.
    pub enum AcronymRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "acronym repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "acronym repository query failed: {message}",
        /// The owning user referenced by a write does not exist.
        UnknownUser { user_id: i32 } => "acronym owner {user_id} does not exist",
    }
}

/// Storage of acronyms and their category links.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AcronymRepository: Send + Sync {
    /// Every acronym, ordered by id.
    async fn list(&self) -> Result<Vec<Acronym>, AcronymRepositoryError>;

    /// Fetch an acronym by identifier.
    async fn find_by_id(&self, id: AcronymId) -> Result<Option<Acronym>, AcronymRepositoryError>;

    /// Insert an acronym and return it with its assigned id.
    async fn create(&self, draft: &AcronymDraft) -> Result<Acronym, AcronymRepositoryError>;

    /// Overwrite every field of `id`. Returns `None` when `id` does not exist.
    async fn update(
        &self,
        id: AcronymId,
        draft: &AcronymDraft,
    ) -> Result<Option<Acronym>, AcronymRepositoryError>;

    /// Delete `id` and its category links. Returns `false` when `id` does not exist.
    async fn delete(&self, id: AcronymId) -> Result<bool, AcronymRepositoryError>;

    /// Acronyms whose short or long form equals `term` exactly, ordered by id.
    async fn search(&self, term: &str) -> Result<Vec<Acronym>, AcronymRepositoryError>;

    /// The acronym with the lowest id.
    async fn first(&self) -> Result<Option<Acronym>, AcronymRepositoryError>;

    /// Every acronym ordered by short form, then id.
    async fn sorted_by_short(&self) -> Result<Vec<Acronym>, AcronymRepositoryError>;

    /// Link a category to an acronym. Linking an existing pair is a no-op.
    async fn attach_category(
        &self,
        acronym: AcronymId,
        category: CategoryId,
    ) -> Result<(), AcronymRepositoryError>;

    /// Remove a category link. Removing an absent pair is a no-op.
    async fn detach_category(
        &self,
        acronym: AcronymId,
        category: CategoryId,
    ) -> Result<(), AcronymRepositoryError>;

    /// Categories linked to `acronym`, ordered by category id.
    async fn categories_of(
        &self,
        acronym: AcronymId,
    ) -> Result<Vec<Category>, AcronymRepositoryError>;
}
