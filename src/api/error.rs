//! Uniform JSON error envelope.
//!
//! Every failure leaves the API as one of four fixed responses:
//!
//! | status | message              |
//! |--------|----------------------|
//! | 400    | `bad request`        |
//! | 404    | `resource not found` |
//! | 405    | `method not allowed` |
//! | 422    | `unprocessable`      |
//!
//! Handlers pick the code per operation. GET listings report storage failures
//! as 405, not 500; existing clients depend on it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::DbError;

/// HTTP-facing error categories.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or semantically invalid request body or parameters.
    #[error("bad request")]
    #[diagnostic(code(trivia::api::bad_request))]
    BadRequest,

    /// The entity, or a non-empty result page, does not exist.
    #[error("resource not found")]
    #[diagnostic(code(trivia::api::not_found))]
    NotFound,

    /// Unsupported method, and storage failures on GET listings.
    #[error("method not allowed")]
    #[diagnostic(code(trivia::api::method_not_allowed))]
    MethodNotAllowed,

    /// Well-formed request that could not be carried out.
    #[error("unprocessable")]
    #[diagnostic(code(trivia::api::unprocessable))]
    Unprocessable,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Classify a storage error for an operation whose generic failure code is `self`.
    ///
    /// A missing entity is always reported as 404. Anything else is logged and
    /// collapsed into `self`; the client never sees the underlying message.
    pub fn storage(self, err: DbError) -> ApiError {
        match err {
            DbError::NotFound { entity_type, id } => {
                tracing::debug!(%entity_type, %id, "entity not found");
                ApiError::NotFound
            }
            other => {
                tracing::error!(error = %other, status = %self.status(), "storage failure");
                self
            }
        }
    }

    /// Map a request rejection (body, path or query) to `self`.
    pub fn rejected(self, rejection: impl std::fmt::Display) -> ApiError {
        tracing::debug!(%rejection, status = %self.status(), "request rejected");
        self
    }
}

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    #[schema(example = false)]
    pub success: bool,
    /// HTTP status code
    #[schema(example = 404)]
    pub error: u16,
    /// Static description of the status code
    #[schema(example = "resource not found")]
    pub message: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(e: ApiError) -> Self {
        Self {
            success: false,
            error: e.status().as_u16(),
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn envelope(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_envelopes_for_every_code() {
        let cases = [
            (ApiError::BadRequest, 400, "bad request"),
            (ApiError::NotFound, 404, "resource not found"),
            (ApiError::MethodNotAllowed, 405, "method not allowed"),
            (ApiError::Unprocessable, 422, "unprocessable"),
        ];

        for (err, code, message) in cases {
            let (status, body) = envelope(err).await;
            assert_eq!(status.as_u16(), code);
            assert_eq!(
                body,
                json!({"success": false, "error": code, "message": message})
            );
        }
    }

    #[test]
    fn test_storage_not_found_becomes_404() {
        let err = DbError::NotFound {
            entity_type: "Question".to_string(),
            id: "1".to_string(),
        };
        assert_eq!(ApiError::Unprocessable.storage(err), ApiError::NotFound);
    }

    #[test]
    fn test_storage_failure_keeps_operation_code() {
        let err = DbError::Database {
            message: "no such table: questions".to_string(),
        };
        assert_eq!(
            ApiError::MethodNotAllowed.storage(err),
            ApiError::MethodNotAllowed
        );
    }

    #[test]
    fn test_rejected_keeps_operation_code() {
        assert_eq!(ApiError::BadRequest.rejected("EOF"), ApiError::BadRequest);
    }
}
