//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "Question".to_string(),
        id: "42".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: Question with id '42'");
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "disk I/O error".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: disk I/O error");
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "checksum mismatch".to_string(),
    };
    assert_eq!(err.to_string(), "Migration error: checksum mismatch");
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database file".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Connection error: unable to open database file"
    );
}

#[test]
fn sqlx_errors_convert_to_database_errors() {
    let err: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn db_result_propagates_with_question_mark() {
    fn inner() -> DbResult<i64> {
        Err(DbError::NotFound {
            entity_type: "Question".to_string(),
            id: "7".to_string(),
        })
    }

    fn outer() -> DbResult<i64> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert!(matches!(outer(), Err(DbError::NotFound { .. })));
}
