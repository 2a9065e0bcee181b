//! Database abstraction layer.
//!
//! Trait-based access to the trivia tables so the HTTP layer never talks to a
//! concrete storage backend directly.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Question, Category)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLite implementation backed by sqlx

mod error;
mod models;
mod repository;
mod sqlite;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
