//! Acronym use-cases: CRUD, search, ordering, ownership and category links.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error};

use super::category_service::{category_not_found, map_category_repository_error};
use super::ports::{
    AcronymRepository, AcronymRepositoryError, CategoryRepository, UserRepository,
};
use super::user_service::map_user_repository_error;
use super::{Acronym, AcronymDraft, AcronymId, Category, CategoryId, Error, User};

/// Map acronym repository failures onto domain errors.
fn map_acronym_repository_error(error: AcronymRepositoryError) -> Error {
    debug!(%error, "acronym repository failure");
    match error {
        AcronymRepositoryError::Connection { .. } => {
            Error::service_unavailable("acronym storage is unavailable")
        }
        AcronymRepositoryError::Query { .. } => Error::internal("acronym storage query failed"),
        AcronymRepositoryError::UnknownUser { user_id } => {
            Error::invalid_request(format!("user {user_id} does not exist"))
                .with_details(json!({ "field": "userID", "code": "unknown_user" }))
        }
    }
}

fn acronym_not_found(id: AcronymId) -> Error {
    Error::not_found(format!("acronym {id} not found"))
}

/// Repositories the acronym service reads and writes.
#[derive(Clone)]
pub struct AcronymServicePorts {
    /// Acronym storage, including category links.
    pub acronyms: Arc<dyn AcronymRepository>,
    /// User storage, for owner lookups.
    pub users: Arc<dyn UserRepository>,
    /// Category storage, for link validation.
    pub categories: Arc<dyn CategoryRepository>,
}

/// Acronym operations exposed to inbound adapters.
#[derive(Clone)]
pub struct AcronymService {
    acronyms: Arc<dyn AcronymRepository>,
    users: Arc<dyn UserRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl AcronymService {
    /// Build the service over its repositories.
    pub fn new(ports: AcronymServicePorts) -> Self {
        let AcronymServicePorts {
            acronyms,
            users,
            categories,
        } = ports;
        Self {
            acronyms,
            users,
            categories,
        }
    }

    /// Every acronym in insertion order.
    pub async fn list(&self) -> Result<Vec<Acronym>, Error> {
        self.acronyms
            .list()
            .await
            .map_err(map_acronym_repository_error)
    }

    /// A single acronym, or `not_found`.
    pub async fn get(&self, id: AcronymId) -> Result<Acronym, Error> {
        self.acronyms
            .find_by_id(id)
            .await
            .map_err(map_acronym_repository_error)?
            .ok_or_else(|| acronym_not_found(id))
    }

    /// Persist a new acronym. An unknown owner is an invalid request.
    pub async fn create(&self, draft: AcronymDraft) -> Result<Acronym, Error> {
        self.acronyms
            .create(&draft)
            .await
            .map_err(map_acronym_repository_error)
    }

    /// Replace every field of `id`.
    pub async fn update(&self, id: AcronymId, draft: AcronymDraft) -> Result<Acronym, Error> {
        self.acronyms
            .update(id, &draft)
            .await
            .map_err(map_acronym_repository_error)?
            .ok_or_else(|| acronym_not_found(id))
    }

    /// Remove `id` together with its category links.
    pub async fn delete(&self, id: AcronymId) -> Result<(), Error> {
        let deleted = self
            .acronyms
            .delete(id)
            .await
            .map_err(map_acronym_repository_error)?;
        if deleted {
            Ok(())
        } else {
            Err(acronym_not_found(id))
        }
    }

    /// Acronyms whose short or long form equals `term`.
    pub async fn search(&self, term: &str) -> Result<Vec<Acronym>, Error> {
        self.acronyms
            .search(term)
            .await
            .map_err(map_acronym_repository_error)
    }

    /// The first acronym in storage order, or `not_found` when there is none.
    pub async fn first(&self) -> Result<Acronym, Error> {
        self.acronyms
            .first()
            .await
            .map_err(map_acronym_repository_error)?
            .ok_or_else(|| Error::not_found("no acronyms exist"))
    }

    /// Every acronym ordered by short form.
    pub async fn sorted(&self) -> Result<Vec<Acronym>, Error> {
        self.acronyms
            .sorted_by_short()
            .await
            .map_err(map_acronym_repository_error)
    }

    /// The user owning `id`.
    pub async fn owner(&self, id: AcronymId) -> Result<User, Error> {
        let acronym = self.get(id).await?;
        let owner = self
            .users
            .find_by_id(acronym.user_id)
            .await
            .map_err(map_user_repository_error)?;
        owner.ok_or_else(|| {
            error!(acronym = %id, user = %acronym.user_id, "acronym owner is missing");
            Error::internal("acronym owner is missing")
        })
    }

    /// Link `category` to `acronym`; both must exist.
    pub async fn attach_category(
        &self,
        acronym: AcronymId,
        category: CategoryId,
    ) -> Result<(), Error> {
        self.ensure_link_ends(acronym, category).await?;
        self.acronyms
            .attach_category(acronym, category)
            .await
            .map_err(map_acronym_repository_error)
    }

    /// Unlink `category` from `acronym`; both must exist, the link need not.
    pub async fn detach_category(
        &self,
        acronym: AcronymId,
        category: CategoryId,
    ) -> Result<(), Error> {
        self.ensure_link_ends(acronym, category).await?;
        self.acronyms
            .detach_category(acronym, category)
            .await
            .map_err(map_acronym_repository_error)
    }

    /// Categories linked to `acronym`.
    pub async fn categories(&self, acronym: AcronymId) -> Result<Vec<Category>, Error> {
        self.get(acronym).await?;
        self.acronyms
            .categories_of(acronym)
            .await
            .map_err(map_acronym_repository_error)
    }

    async fn ensure_link_ends(
        &self,
        acronym: AcronymId,
        category: CategoryId,
    ) -> Result<(), Error> {
        self.get(acronym).await?;
        self.categories
            .find_by_id(category)
            .await
            .map_err(map_category_repository_error)?
            .ok_or_else(|| category_not_found(category))?;
        Ok(())
    }
}
