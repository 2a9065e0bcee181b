//! Database error types.
//!
//! Storage-backend agnostic errors, derived with thiserror and annotated with
//! miette diagnostic codes.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(trivia::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(trivia::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(trivia::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(trivia::db::connection_error))]
    Connection { message: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        DbError::Database {
            message: e.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
