//! Question handlers: listing, creation, deletion and search.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::api::error::{ApiError, ErrorResponse};
use crate::api::pagination::{PageQuery, paginate, requested_page};
use crate::db::{
    CategoryRepository, Database, NewQuestion, Question, QuestionOrder, QuestionQuery,
    QuestionRepository,
};

use super::categories::format_categories;

// =============================================================================
// DTOs
// =============================================================================

/// Formatted question row
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuestionResponse {
    #[schema(example = 5)]
    pub id: i64,
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    pub question: String,
    #[schema(example = "Maya Angelou")]
    pub answer: String,
    #[schema(example = 4)]
    pub category: i64,
    #[schema(example = 2)]
    pub difficulty: i64,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct QuestionsResponse {
    pub success: bool,
    /// Requested page of questions, ordered by category
    pub questions: Vec<QuestionResponse>,
    /// Number of questions in the table
    pub total_questions: usize,
    /// Category id to category type
    #[schema(example = json!({"1": "Science", "2": "Art"}))]
    pub categories: BTreeMap<i64, String>,
    /// Category of every question in the table, not only the current page
    pub current_category: Vec<i64>,
}

/// Create question request DTO
///
/// `category` and `difficulty` accept a number or a numeric string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    #[schema(example = "What is the largest lake in Africa?")]
    pub question: String,
    #[schema(example = "Lake Victoria")]
    pub answer: String,
    #[serde(deserialize_with = "crate::serde_utils::lenient_i64")]
    #[schema(example = 3)]
    pub category: i64,
    #[serde(deserialize_with = "crate::serde_utils::lenient_i64")]
    #[schema(example = 2)]
    pub difficulty: i64,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        Self {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    /// Id of the new question
    #[schema(example = 24)]
    pub created: i64,
    /// Requested page of all questions, ordered by id
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    /// Case-insensitive substring of the question text
    #[serde(rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: String,
}

#[derive(Serialize, ToSchema)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    /// Requested page of matches
    pub questions: Vec<QuestionResponse>,
    /// Category of every match, sorted
    pub current_category: Vec<i64>,
    /// Number of matches across all pages
    pub total_questions: usize,
}

fn format_page(page: i64, questions: Vec<Question>) -> Vec<QuestionResponse> {
    paginate(page, questions)
        .into_iter()
        .map(QuestionResponse::from)
        .collect()
}

// =============================================================================
// Handlers
// =============================================================================

/// List questions
///
/// Returns one page of questions ordered by category, together with the
/// category map and the category of every stored question.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionsResponse),
        (status = 405, description = "Questions could not be read", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_questions<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let failed = |e| ApiError::MethodNotAllowed.storage(e);

    let questions = state
        .db()
        .questions()
        .list(&QuestionQuery::ordered_by(QuestionOrder::Category))
        .await
        .map_err(failed)?;
    let total_questions = state.db().questions().count().await.map_err(failed)?;
    let categories = state.db().categories().list().await.map_err(failed)?;

    let current_category = questions.iter().map(|q| q.category).collect();

    // An out-of-range page is an empty list here, not a 404
    Ok(Json(QuestionsResponse {
        success: true,
        questions: format_page(requested_page(query), questions),
        total_questions,
        categories: format_categories(categories),
        current_category,
    }))
}

/// Create a question
///
/// Stores a new question and returns its id plus the requested page of all
/// questions ordered by id.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 422, description = "Invalid body or question could not be stored", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_question<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let failed = |e| ApiError::Unprocessable.storage(e);

    let Json(req) = body.map_err(|e| ApiError::Unprocessable.rejected(e))?;

    let created = state
        .db()
        .questions()
        .create(&NewQuestion::from(req))
        .await
        .map_err(failed)?;
    tracing::info!(id = created.id, "question created");

    let questions = state
        .db()
        .questions()
        .list(&QuestionQuery::ordered_by(QuestionOrder::Id))
        .await
        .map_err(failed)?;
    let total_questions = questions.len();

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        questions: format_page(requested_page(query), questions),
        total_questions,
    }))
}

/// Delete a question
///
/// Permanently removes a question by id.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(
        ("id" = i64, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Question could not be deleted", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_question<D: Database>(
    State(state): State<AppState<D>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::NotFound.rejected(e))?;

    state
        .db()
        .questions()
        .delete(id)
        .await
        .map_err(|e| ApiError::Unprocessable.storage(e))?;
    tracing::info!(id, "question deleted");

    Ok(Json(DeleteQuestionResponse { success: true }))
}

/// Search questions
///
/// Returns one page of questions whose text contains `searchTerm`, ignoring
/// case. No match at all, or a page past the last match, is a 404.
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "questions",
    params(PageQuery),
    request_body = SearchQuestionsRequest,
    responses(
        (status = 200, description = "Page of matching questions", body = SearchQuestionsResponse),
        (status = 400, description = "Invalid body or search failed", body = ErrorResponse),
        (status = 404, description = "No questions on the requested page", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn search_questions<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchQuestionsRequest>, JsonRejection>,
) -> Result<Json<SearchQuestionsResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest.rejected(e))?;

    let matches = state
        .db()
        .questions()
        .list(&QuestionQuery::matching(req.search_term))
        .await
        .map_err(|e| ApiError::BadRequest.storage(e))?;

    let total_questions = matches.len();
    let mut current_category: Vec<i64> = matches.iter().map(|q| q.category).collect();
    current_category.sort_unstable();

    let questions = format_page(requested_page(query), matches);
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(SearchQuestionsResponse {
        success: true,
        questions,
        current_category,
        total_questions,
    }))
}
