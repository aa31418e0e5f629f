//! Storage-assigned record identifiers.
//!
//! Identifiers are opaque integers handed out by the database. Each entity
//! gets its own newtype so an acronym id cannot be passed where a category
//! id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw storage identifier.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Raw storage identifier.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id! {
    /// Identifier of a [`crate::domain::User`].
    UserId
}

entity_id! {
    /// Identifier of an [`crate::domain::Acronym`].
    AcronymId
}

entity_id! {
    /// Identifier of a [`crate::domain::Category`].
    CategoryId
}
