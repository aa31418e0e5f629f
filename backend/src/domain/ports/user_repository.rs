//! Port for user persistence.

use async_trait::async_trait;

use crate::domain::{Acronym, User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage of users and traversal to the acronyms they own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user, ordered by id.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Insert a user and return it with its assigned id.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserRepositoryError>;

    /// Acronyms owned by `id`, ordered by acronym id.
    async fn acronyms_of(&self, id: UserId) -> Result<Vec<Acronym>, UserRepositoryError>;
}
