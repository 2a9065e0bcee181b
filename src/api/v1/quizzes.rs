//! Quiz handler: serves a random question the player has not seen yet.

use std::collections::HashSet;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::api::error::{ApiError, ErrorResponse};
use crate::db::{Database, Question, QuestionQuery, QuestionRepository};

use super::QuestionResponse;

/// Highest category id a quiz may be restricted to.
pub const MAX_QUIZ_CATEGORY: i64 = 6;

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids of questions already asked in this quiz
    #[serde(deserialize_with = "crate::serde_utils::lenient_i64_vec")]
    #[schema(example = json!([1, 4, 20]))]
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// Category selected for the quiz. Any other fields (such as `type`) are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// 0 for all categories, otherwise 1 to 6
    #[serde(deserialize_with = "crate::serde_utils::lenient_i64")]
    #[schema(example = 1)]
    pub id: i64,
}

/// The next question, or `false` once the pool is exhausted.
#[derive(Debug, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QuizQuestion {
    Next(QuestionResponse),
    Exhausted(bool),
}

#[derive(Serialize, ToSchema)]
pub struct QuizResponse {
    /// False when no unseen question is left
    pub success: bool,
    pub question: QuizQuestion,
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl TryFrom<&QuizCategory> for QuizScope {
    type Error = ApiError;

    fn try_from(category: &QuizCategory) -> Result<Self, Self::Error> {
        match category.id {
            0 => Ok(QuizScope::All),
            id @ 1..=MAX_QUIZ_CATEGORY => Ok(QuizScope::Category(id)),
            _ => Err(ApiError::BadRequest),
        }
    }
}

impl From<QuizScope> for QuestionQuery {
    fn from(scope: QuizScope) -> Self {
        match scope {
            QuizScope::All => QuestionQuery::default(),
            QuizScope::Category(id) => QuestionQuery::in_category(id),
        }
    }
}

/// Pick one question uniformly at random from `pool`, skipping ids in `previous`.
pub fn pick_question<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let candidates: Vec<Question> = pool.into_iter().filter(|q| !seen.contains(&q.id)).collect();
    candidates.choose(rng).cloned()
}

/// Next quiz question
///
/// Draws a random question from the selected category (or from every
/// category when `quiz_category.id` is 0) that is not in
/// `previous_questions`. When none is left the response is
/// `{"success": false, "question": false}` with status 200.
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or exhaustion marker", body = QuizResponse),
        (status = 400, description = "Invalid body, unknown category, or lookup failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn next_quiz_question<D: Database>(
    State(state): State<AppState<D>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest.rejected(e))?;
    let scope = QuizScope::try_from(&req.quiz_category)?;

    let pool = state
        .db()
        .questions()
        .list(&QuestionQuery::from(scope))
        .await
        .map_err(|e| ApiError::BadRequest.storage(e))?;

    let picked = pick_question(pool, &req.previous_questions, &mut rand::thread_rng());

    Ok(Json(match picked {
        Some(question) => QuizResponse {
            success: true,
            question: QuizQuestion::Next(question.into()),
        },
        None => {
            tracing::debug!(?scope, "quiz pool exhausted");
            QuizResponse {
                success: false,
                question: QuizQuestion::Exhausted(false),
            }
        }
    }))
}
