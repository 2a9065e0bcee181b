//! API route configuration.

use axum::Router;
use axum::http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::error::{ApiError, ErrorResponse};
use super::state::AppState;
use super::v1::{
    self, CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest,
    CreateQuestionResponse, DeleteQuestionResponse, HealthResponse, QuestionResponse,
    QuestionsResponse, QuizCategory, QuizQuestion, QuizRequest, QuizResponse,
    SearchQuestionsRequest, SearchQuestionsResponse,
};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Trivia questions, categories and quizzes",
        license(name = "GPL-2.0")
    ),
    paths(
        v1::health,
        v1::list_categories,
        v1::list_category_questions,
        v1::list_questions,
        v1::create_question,
        v1::delete_question,
        v1::search_questions,
        v1::next_quiz_question,
    ),
    components(
        schemas(
            HealthResponse,
            CategoriesResponse,
            CategoryQuestionsResponse,
            QuestionResponse,
            QuestionsResponse,
            CreateQuestionRequest,
            CreateQuestionResponse,
            DeleteQuestionResponse,
            SearchQuestionsRequest,
            SearchQuestionsResponse,
            QuizRequest,
            QuizCategory,
            QuizQuestion,
            QuizResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Service health"),
        (name = "categories", description = "Category listing and per-category questions"),
        (name = "questions", description = "Question listing, creation, deletion and search"),
        (name = "quizzes", description = "Random unseen questions for quiz play")
    )
)]
pub struct ApiDoc;

/// CORS policy: any origin, the methods and headers the quiz frontend uses.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let system_routes = routes!(D => {
        get "/health" => v1::health,
    });

    let category_routes = routes!(D => {
        get "/categories" => v1::list_categories,
        get "/categories/{id}/questions" => v1::list_category_questions,
    });

    let question_routes = routes!(D => {
        get "/questions" => v1::list_questions,
        post "/questions" => v1::create_question,
        post "/questions/search" => v1::search_questions,
        delete "/questions/{id}" => v1::delete_question,
    });

    let quiz_routes = routes!(D => {
        post "/quizzes" => v1::next_quiz_question,
    });

    system_routes
        .merge(category_routes)
        .merge(question_routes)
        .merge(quiz_routes)
        .merge(Scalar::with_url("/docs", api))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(cors_layer())
}
