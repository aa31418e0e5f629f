//! Acronym records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{DraftValidationError, require_text};
use super::{AcronymId, UserId};

/// A short form, its expansion, and the user who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Acronym {
    /// Storage-assigned identifier.
    #[schema(value_type = i32, example = 1)]
    pub id: AcronymId,
    /// Short form, e.g. `OMG`.
    #[schema(example = "TIL")]
    pub short: String,
    /// Long form, e.g. `Oh My God`.
    #[schema(example = "Today I Learned")]
    pub long: String,
    /// Owning user.
    #[serde(rename = "userID")]
    #[schema(value_type = i32, example = 1)]
    pub user_id: UserId,
}

/// Validated field set for creating or fully replacing an acronym.
///
/// # Examples
/// ```
/// use acronyms::domain::{AcronymDraft, UserId};
///
/// let draft = AcronymDraft::new("TIL", "Today I Learned", UserId::new(1)).expect("valid");
/// assert_eq!(draft.short(), "TIL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymDraft {
    short: String,
    long: String,
    user_id: UserId,
}

impl AcronymDraft {
    /// Validate and construct a draft.
    pub fn new(
        short: impl Into<String>,
        long: impl Into<String>,
        user_id: UserId,
    ) -> Result<Self, DraftValidationError> {
        Ok(Self {
            short: require_text("short", short)?,
            long: require_text("long", long)?,
            user_id,
        })
    }

    /// Short form.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Long form.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Owning user.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Materialise the draft under a storage-assigned id.
    pub fn into_acronym(self, id: AcronymId) -> Acronym {
        Acronym {
            id,
            short: self.short,
            long: self.long,
            user_id: self.user_id,
        }
    }
}
