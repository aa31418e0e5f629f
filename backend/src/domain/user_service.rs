//! User use-cases.

use std::sync::Arc;

use tracing::debug;

use super::ports::{UserRepository, UserRepositoryError};
use super::{Acronym, Error, User, UserDraft, UserId};

/// Map user repository failures onto domain errors.
pub(crate) fn map_user_repository_error(error: UserRepositoryError) -> Error {
    debug!(%error, "user repository failure");
    match error {
        UserRepositoryError::Connection { .. } => {
            Error::service_unavailable("user storage is unavailable")
        }
        UserRepositoryError::Query { .. } => Error::internal("user storage query failed"),
    }
}

pub(crate) fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

/// Listing, lookup and creation of users.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Build the service over a user repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Every user in insertion order.
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_repository_error)
    }

    /// A single user, or `not_found`.
    pub async fn get(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }

    /// Persist a new user.
    pub async fn create(&self, draft: UserDraft) -> Result<User, Error> {
        self.users
            .create(&draft)
            .await
            .map_err(map_user_repository_error)
    }

    /// Acronyms owned by `id`, or `not_found` when the user is absent.
    pub async fn acronyms(&self, id: UserId) -> Result<Vec<Acronym>, Error> {
        self.get(id).await?;
        self.users
            .acronyms_of(id)
            .await
            .map_err(map_user_repository_error)
    }
}
