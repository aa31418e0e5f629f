//! Category use-cases.

use std::sync::Arc;

use tracing::debug;

use super::ports::{CategoryRepository, CategoryRepositoryError};
use super::{Acronym, Category, CategoryDraft, CategoryId, Error};

/// Map category repository failures onto domain errors.
pub(crate) fn map_category_repository_error(error: CategoryRepositoryError) -> Error {
    debug!(%error, "category repository failure");
    match error {
        CategoryRepositoryError::Connection { .. } => {
            Error::service_unavailable("category storage is unavailable")
        }
        CategoryRepositoryError::Query { .. } => Error::internal("category storage query failed"),
    }
}

pub(crate) fn category_not_found(id: CategoryId) -> Error {
    Error::not_found(format!("category {id} not found"))
}

/// Listing, lookup, creation and removal of categories.
#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Build the service over a category repository.
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// Every category in insertion order.
    pub async fn list(&self) -> Result<Vec<Category>, Error> {
        self.categories
            .list()
            .await
            .map_err(map_category_repository_error)
    }

    /// A single category, or `not_found`.
    pub async fn get(&self, id: CategoryId) -> Result<Category, Error> {
        self.categories
            .find_by_id(id)
            .await
            .map_err(map_category_repository_error)?
            .ok_or_else(|| category_not_found(id))
    }

    /// Persist a new category.
    pub async fn create(&self, draft: CategoryDraft) -> Result<Category, Error> {
        self.categories
            .create(&draft)
            .await
            .map_err(map_category_repository_error)
    }

    /// Remove `id`; its acronym links go with it.
    pub async fn delete(&self, id: CategoryId) -> Result<(), Error> {
        if self
            .categories
            .delete(id)
            .await
            .map_err(map_category_repository_error)?
        {
            Ok(())
        } else {
            Err(category_not_found(id))
        }
    }

    /// Acronyms tagged with `id`.
    pub async fn acronyms(&self, id: CategoryId) -> Result<Vec<Acronym>, Error> {
        self.get(id).await?;
        self.categories
            .acronyms_of(id)
            .await
            .map_err(map_category_repository_error)
    }
}
