//! User records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;
use super::validation::{DraftValidationError, require_text};

/// A person owning zero or more acronyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Storage-assigned identifier.
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
    /// Full name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Login handle.
    #[schema(example = "ada")]
    pub username: String,
}

/// Validated field set for creating a user.
///
/// # Examples
/// ```
/// use acronyms::domain::UserDraft;
///
/// let draft = UserDraft::new("Ada Lovelace", "ada").expect("valid user");
/// assert_eq!(draft.username(), "ada");
/// assert!(UserDraft::new("Ada Lovelace", " ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    username: String,
}

impl UserDraft {
    /// Validate and construct a draft.
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, DraftValidationError> {
        Ok(Self {
            name: require_text("name", name)?,
            username: require_text("username", username)?,
        })
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Login handle.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Materialise the draft under a storage-assigned id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
        }
    }
}
