//! Domain models for the trivia database.
//!
//! These models are storage-agnostic and represent the two entities the API
//! serves: questions and the categories they belong to.

// =============================================================================
// Query Types
// =============================================================================

/// Ordering applied to question listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionOrder {
    /// Insertion order.
    #[default]
    Id,
    /// Grouped by category, ties broken by id.
    Category,
}

/// Filters for listing questions. An empty query selects every row.
#[derive(Debug, Clone, Default)]
pub struct QuestionQuery {
    /// Only questions whose `category` equals this id.
    pub category: Option<i64>,
    /// Case-insensitive literal substring of the question text.
    pub search: Option<String>,
    pub order: QuestionOrder,
}

impl QuestionQuery {
    pub fn ordered_by(order: QuestionOrder) -> Self {
        Self {
            order,
            ..Default::default()
        }
    }

    pub fn in_category(category: i64) -> Self {
        Self {
            category: Some(category),
            ..Default::default()
        }
    }

    pub fn matching(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Default::default()
        }
    }
}

// =============================================================================
// Entities
// =============================================================================

/// A trivia question.
///
/// `category` refers to a [`Category`] id but is not enforced; a dangling
/// reference is stored and served as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question category. Read-only through the API; seeded by the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    /// Display name, stored in the `type` column.
    pub kind: String,
}
