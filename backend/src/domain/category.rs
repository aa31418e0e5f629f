//! Category tags.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CategoryId;
use super::validation::{DraftValidationError, require_text};

/// A tag that can be attached to many acronyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Storage-assigned identifier.
    #[schema(value_type = i32, example = 1)]
    pub id: CategoryId,
    /// Display name.
    #[schema(example = "Teenager")]
    pub name: String,
}

/// Validated field set for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    name: String,
}

impl CategoryDraft {
    /// Validate and construct a draft.
    pub fn new(name: impl Into<String>) -> Result<Self, DraftValidationError> {
        Ok(Self {
            name: require_text("name", name)?,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Materialise the draft under a storage-assigned id.
    pub fn into_category(self, id: CategoryId) -> Category {
        Category { id, name: self.name }
    }
}
