//! Liveness probe.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, QuestionRepository};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the question table cannot be read
    #[schema(example = "ok")]
    pub status: String,
    /// Stored questions, absent when degraded
    #[schema(example = 19)]
    pub total_questions: Option<usize>,
}

/// Service health
///
/// Always answers 200 while the process is up; storage trouble shows in `status`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service status and question count", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health<D: Database>(State(state): State<AppState<D>>) -> Json<HealthResponse> {
    match state.db().questions().count().await {
        Ok(total) => Json(HealthResponse {
            status: "ok".to_string(),
            total_questions: Some(total),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not count questions");
            Json(HealthResponse {
                status: "degraded".to_string(),
                total_questions: None,
            })
        }
    }
}
