//! Category handlers.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::api::error::{ApiError, ErrorResponse};
use crate::api::pagination::{PageQuery, paginate, requested_page};
use crate::db::{Category, CategoryRepository, Database, QuestionQuery, QuestionRepository};

use super::QuestionResponse;

#[derive(Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Category id to category type
    #[schema(example = json!({"1": "Science", "2": "Art"}))]
    pub categories: BTreeMap<i64, String>,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    /// Requested page of the category's questions, ordered by id
    pub questions: Vec<QuestionResponse>,
    /// Number of questions in the category across all pages
    pub total_questions: usize,
}

/// Format categories as an `{id: type}` map.
pub fn format_categories(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// List categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 405, description = "Categories could not be read", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_categories<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .db()
        .categories()
        .list()
        .await
        .map_err(|e| ApiError::MethodNotAllowed.storage(e))?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: format_categories(categories),
    }))
}

/// List questions in a category
///
/// An empty page, including any page of a category with no questions, is a 404.
/// The category id itself is not checked against the category table.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "No questions on the requested page", body = ErrorResponse),
        (status = 422, description = "Questions could not be read", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_category_questions<D: Database>(
    State(state): State<AppState<D>>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::NotFound.rejected(e))?;

    let in_category = state
        .db()
        .questions()
        .list(&QuestionQuery::in_category(id))
        .await
        .map_err(|e| ApiError::Unprocessable.storage(e))?;

    let total_questions = in_category.len();
    let questions: Vec<QuestionResponse> = paginate(requested_page(query), in_category)
        .into_iter()
        .map(QuestionResponse::from)
        .collect();

    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
    }))
}
