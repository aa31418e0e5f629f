//! Field validation shared by the entity drafts.

use thiserror::Error;

/// Validation failures raised while building a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftValidationError {
    /// A required text field was empty or whitespace only.
    #[error("{field} must not be empty")]
    BlankField {
        /// JSON name of the offending field.
        field: &'static str,
    },
}

impl DraftValidationError {
    /// JSON name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankField { field } => field,
        }
    }

    /// Stable machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::BlankField { .. } => "blank_field",
        }
    }
}

/// Accept `value` unless it is blank once trimmed.
pub(crate) fn require_text(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, DraftValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(DraftValidationError::BlankField { field });
    }
    Ok(value)
}
