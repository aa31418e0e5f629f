//! PostgreSQL-backed `CategoryRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Acronym, Category, CategoryDraft, CategoryId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AcronymRow, CategoryRow, NewCategoryRow};
use super::pool::{DbPool, PoolError};
use super::schema::{acronym_category_pivot, acronyms, categories};

/// Diesel implementation of the [`CategoryRepository`] port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CategoryRepositoryError {
    map_pool_error(error, CategoryRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> CategoryRepositoryError {
    map_diesel_error(
        error,
        CategoryRepositoryError::query,
        CategoryRepositoryError::connection,
    )
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = categories::table
            .order(categories::id.asc())
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = categories::table
            .find(id.get())
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Category::from))
    }

    async fn create(&self, draft: &CategoryDraft) -> Result<Category, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::insert_into(categories::table)
            .values(NewCategoryRow::from(draft))
            .returning(CategoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(row.into())
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        // Pivot rows go with the category via ON DELETE CASCADE.
        let deleted = diesel::delete(categories::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }

    async fn acronyms_of(&self, id: CategoryId) -> Result<Vec<Acronym>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = acronyms::table
            .inner_join(acronym_category_pivot::table)
            .filter(acronym_category_pivot::category_id.eq(id.get()))
            .order(acronyms::id.asc())
            .select(AcronymRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Acronym::from).collect())
    }
}
