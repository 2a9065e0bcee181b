//! SQLite CategoryRepository implementation.

use sqlx::{Row, SqlitePool};

use crate::db::{Category, CategoryRepository, DbResult};

/// SQLx-backed category repository.
pub struct SqliteCategoryRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> CategoryRepository for SqliteCategoryRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Category {
                id: row.get("id"),
                kind: row.get("type"),
            })
            .collect())
    }
}
