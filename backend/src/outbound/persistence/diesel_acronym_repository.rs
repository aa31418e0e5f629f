//! PostgreSQL-backed `AcronymRepository`, including the category pivot.
//!
//! Deleting an acronym relies on `ON DELETE CASCADE` to drop its pivot rows;
//! attaching relies on the unique `(acronym_id, category_id)` constraint with
//! `ON CONFLICT DO NOTHING` so repeated links are no-ops.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AcronymRepository, AcronymRepositoryError};
use crate::domain::{Acronym, AcronymDraft, AcronymId, Category, CategoryId};

use super::error_mapping::{map_acronym_error, map_acronym_write_error, map_pool_error};
use super::models::{AcronymChanges, AcronymRow, CategoryRow, NewPivotRow};
use super::pool::{DbPool, PoolError};
use super::schema::{acronym_category_pivot, acronyms, categories};

/// Diesel implementation of the [`AcronymRepository`] port.
#[derive(Clone)]
pub struct DieselAcronymRepository {
    pool: DbPool,
}

impl DieselAcronymRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> AcronymRepositoryError {
    map_pool_error(error, AcronymRepositoryError::connection)
}

#[async_trait]
impl AcronymRepository for DieselAcronymRepository {
    async fn list(&self) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = acronyms::table
            .order(acronyms::id.asc())
            .select(AcronymRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_acronym_error)?;
        Ok(rows.into_iter().map(Acronym::from).collect())
    }

    async fn find_by_id(&self, id: AcronymId) -> Result<Option<Acronym>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = acronyms::table
            .find(id.get())
            .select(AcronymRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_acronym_error)?;
        Ok(row.map(Acronym::from))
    }

    async fn create(&self, draft: &AcronymDraft) -> Result<Acronym, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::insert_into(acronyms::table)
            .values(AcronymChanges::from(draft))
            .returning(AcronymRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_acronym_write_error(err, draft.user_id()))?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: AcronymId,
        draft: &AcronymDraft,
    ) -> Result<Option<Acronym>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::update(acronyms::table.find(id.get()))
            .set(AcronymChanges::from(draft))
            .returning(AcronymRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_acronym_write_error(err, draft.user_id()))?;
        Ok(row.map(Acronym::from))
    }

    async fn delete(&self, id: AcronymId) -> Result<bool, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(acronyms::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_acronym_error)?;
        Ok(deleted > 0)
    }

    async fn search(&self, term: &str) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = acronyms::table
            .filter(acronyms::short.eq(term).or(acronyms::long.eq(term)))
            .order(acronyms::id.asc())
            .select(AcronymRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_acronym_error)?;
        Ok(rows.into_iter().map(Acronym::from).collect())
    }

    async fn first(&self) -> Result<Option<Acronym>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = acronyms::table
            .order(acronyms::id.asc())
            .select(AcronymRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_acronym_error)?;
        Ok(row.map(Acronym::from))
    }

    async fn sorted_by_short(&self) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = acronyms::table
            .order((acronyms::short.asc(), acronyms::id.asc()))
            .select(AcronymRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_acronym_error)?;
        Ok(rows.into_iter().map(Acronym::from).collect())
    }

    async fn attach_category(
        &self,
        acronym: AcronymId,
        category: CategoryId,
    ) -> Result<(), AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::insert_into(acronym_category_pivot::table)
            .values(NewPivotRow::link(acronym, category))
            .on_conflict((
                acronym_category_pivot::acronym_id,
                acronym_category_pivot::category_id,
            ))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_acronym_error)?;
        Ok(())
    }

    async fn detach_category(
        &self,
        acronym: AcronymId,
        category: CategoryId,
    ) -> Result<(), AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::delete(
            acronym_category_pivot::table
                .filter(acronym_category_pivot::acronym_id.eq(acronym.get()))
                .filter(acronym_category_pivot::category_id.eq(category.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_acronym_error)?;
        Ok(())
    }

    async fn categories_of(
        &self,
        acronym: AcronymId,
    ) -> Result<Vec<Category>, AcronymRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = categories::table
            .inner_join(acronym_category_pivot::table)
            .filter(acronym_category_pivot::acronym_id.eq(acronym.get()))
            .order(categories::id.asc())
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_acronym_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}
