//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it; repositories convert them to domain records.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Acronym, AcronymDraft, AcronymId, Category, CategoryDraft, CategoryId, User, UserDraft, UserId,
};

use super::schema::{acronym_category_pivot, acronyms, categories, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub username: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            username: row.username,
        }
    }
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub username: &'a str,
}

impl<'a> From<&'a UserDraft> for NewUserRow<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name(),
            username: draft.username(),
        }
    }
}

/// Row struct for reading from the acronyms table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = acronyms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AcronymRow {
    pub id: i32,
    pub short: String,
    pub long: String,
    pub user_id: i32,
}

impl From<AcronymRow> for Acronym {
    fn from(row: AcronymRow) -> Self {
        Self {
            id: AcronymId::new(row.id),
            short: row.short,
            long: row.long,
            user_id: UserId::new(row.user_id),
        }
    }
}

/// Insertable and changeset struct for acronym writes.
///
/// Used for both inserts and full replacements, so every column is written.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = acronyms)]
pub(crate) struct AcronymChanges<'a> {
    pub short: &'a str,
    pub long: &'a str,
    pub user_id: i32,
}

impl<'a> From<&'a AcronymDraft> for AcronymChanges<'a> {
    fn from(draft: &'a AcronymDraft) -> Self {
        Self {
            short: draft.short(),
            long: draft.long(),
            user_id: draft.user_id().get(),
        }
    }
}

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            name: row.name,
        }
    }
}

/// Insertable struct for creating category records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub name: &'a str,
}

impl<'a> From<&'a CategoryDraft> for NewCategoryRow<'a> {
    fn from(draft: &'a CategoryDraft) -> Self {
        Self { name: draft.name() }
    }
}

/// Insertable struct for acronym/category links.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = acronym_category_pivot)]
pub(crate) struct NewPivotRow {
    pub id: Uuid,
    pub acronym_id: i32,
    pub category_id: i32,
}

impl NewPivotRow {
    pub(crate) fn link(acronym: AcronymId, category: CategoryId) -> Self {
        Self {
            id: Uuid::new_v4(),
            acronym_id: acronym.get(),
            category_id: category.get(),
        }
    }
}
