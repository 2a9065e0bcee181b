//! SQLite database connection and migration management.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::{SqliteCategoryRepository, SqliteQuestionRepository};
use crate::db::{Database, DbError, DbResult};

/// SQLite database implementation.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (or create) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every SQLite connection to `:memory:` is its own database, so the pool
    /// is pinned to a single connection that never expires.
    pub async fn in_memory() -> DbResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Questions<'a> = SqliteQuestionRepository<'a>;
    type Categories<'a> = SqliteCategoryRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("data/sql/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;

        Ok(())
    }

    fn questions(&self) -> Self::Questions<'_> {
        SqliteQuestionRepository { pool: &self.pool }
    }

    fn categories(&self) -> Self::Categories<'_> {
        SqliteCategoryRepository { pool: &self.pool }
    }
}
