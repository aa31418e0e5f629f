//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. Rows are never deleted while they own acronyms.
    users (id) {
        id -> Int4,
        name -> Text,
        username -> Text,
    }
}

diesel::table! {
    /// Acronyms, each owned by exactly one user.
    acronyms (id) {
        id -> Int4,
        short -> Text,
        long -> Text,
        /// Owning user; `ON DELETE RESTRICT`.
        user_id -> Int4,
    }
}

diesel::table! {
    /// Category tags.
    categories (id) {
        id -> Int4,
        name -> Text,
    }
}

diesel::table! {
    /// Many-to-many link between acronyms and categories.
    ///
    /// Both foreign keys cascade on delete and the pair is unique.
    acronym_category_pivot (id) {
        id -> Uuid,
        acronym_id -> Int4,
        category_id -> Int4,
    }
}

diesel::joinable!(acronyms -> users (user_id));
diesel::joinable!(acronym_category_pivot -> acronyms (acronym_id));
diesel::joinable!(acronym_category_pivot -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(users, acronyms, categories, acronym_category_pivot);
