//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer. Methods
//! return `Send` futures so handlers generic over [`Database`] can be served
//! by axum.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Category, NewQuestion, Question, QuestionQuery},
};

/// Repository for Question operations.
pub trait QuestionRepository {
    /// Insert a new question and return it with its generated id.
    fn create(&self, question: &NewQuestion) -> impl Future<Output = DbResult<Question>> + Send;

    /// List questions matching the query.
    fn list(&self, query: &QuestionQuery) -> impl Future<Output = DbResult<Vec<Question>>> + Send;

    /// Count every stored question.
    fn count(&self) -> impl Future<Output = DbResult<usize>> + Send;

    /// Delete a question by id. `DbError::NotFound` when no row was removed.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Category operations.
pub trait CategoryRepository {
    /// Get all categories ordered by id.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Category>>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Questions<'a>: QuestionRepository + Send + Sync
    where
        Self: 'a;
    type Categories<'a>: CategoryRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the question repository.
    fn questions(&self) -> Self::Questions<'_>;

    /// Get the category repository.
    fn categories(&self) -> Self::Categories<'_>;
}
