//! Fixed-size pagination over already-fetched rows.

use axum::extract::{Query, rejection::QueryRejection};
use serde::Deserialize;
use utoipa::IntoParams;

/// Rows per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` query parameter.
///
/// Parsed leniently: a missing or non-numeric value means page 1, the same as
/// omitting the parameter.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number
    #[param(example = 1)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Page requested by a handler's `Query<PageQuery>` extraction.
///
/// A query string that cannot be parsed at all falls back to page 1.
pub fn requested_page(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    query.map(|Query(q)| q).unwrap_or_default().page()
}

/// Return page `page` (1-based) of `items`: at most [`QUESTIONS_PER_PAGE`]
/// elements starting at `(page - 1) * QUESTIONS_PER_PAGE`.
///
/// Pages past the end, and pages below 1, are empty. Callers decide whether
/// an empty page is an error.
pub fn paginate<T>(page: i64, items: Vec<T>) -> Vec<T> {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
