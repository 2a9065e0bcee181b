//! Shared helper functions for SQLite repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::{Question, QuestionOrder, QuestionQuery};

/// Columns selected for every question read.
pub const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Build the ORDER BY clause for a question listing.
pub fn build_order_clause(order: QuestionOrder) -> &'static str {
    match order {
        QuestionOrder::Id => "ORDER BY id ASC",
        QuestionOrder::Category => "ORDER BY category ASC, id ASC",
    }
}

/// A WHERE clause plus the values to bind to its placeholders, in order.
#[derive(Debug, Default, PartialEq)]
pub struct Filter {
    pub clause: String,
    pub binds: Vec<i64>,
}

/// Build the WHERE clause for a question listing.
///
/// Only the category filter runs in SQL. The text search is applied to the
/// fetched rows by [`retain_matching`], since SQLite's `LOWER` folds ASCII only.
pub fn build_filter(query: &QuestionQuery) -> Filter {
    match query.category {
        Some(category) => Filter {
            clause: "WHERE category = ?".to_string(),
            binds: vec![category],
        },
        None => Filter::default(),
    }
}

/// Keep the questions whose text contains `term`, ignoring case.
///
/// The term is a literal substring; `%` and `_` carry no wildcard meaning.
/// Case folding is Unicode-aware, so "zürich" matches "ZÜRICH".
pub fn retain_matching(questions: &mut Vec<Question>, term: &str) {
    let needle = term.to_lowercase();
    questions.retain(|q| q.question.to_lowercase().contains(&needle));
}

/// Map a row selected with [`QUESTION_COLUMNS`] into a [`Question`].
pub fn question_from_row(row: &SqliteRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}
