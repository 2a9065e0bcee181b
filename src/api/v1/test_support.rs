//! Shared fixtures for the v1 handler tests.

use axum::{Router, body::Body, http::Request};
use http_body_util::BodyExt;
use serde_json::Value;

use crate::api::{AppState, routes};
use crate::db::{Database, NewQuestion, Question, QuestionRepository, SqliteDatabase};

/// (question, answer, category, difficulty)
pub type Row = (&'static str, &'static str, i64, i64);

/// Nineteen questions spread over all six seeded categories, in insert order.
pub const TRIVIA: &[Row] = &[
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism?", "Jackson Pollock", 2, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of Lestat?", "Tom Cruise", 5, 4),
    ("What was the Title of the 1990 fantasy directed by Tim Burton?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
];

/// A migrated in-memory database holding `rows`.
pub async fn seeded_db(rows: &[Row]) -> (SqliteDatabase, Vec<Question>) {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");

    let mut created = Vec::with_capacity(rows.len());
    for (question, answer, category, difficulty) in rows {
        let q = db
            .questions()
            .create(&NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                category: *category,
                difficulty: *difficulty,
            })
            .await
            .expect("Failed to seed question");
        created.push(q);
    }

    (db, created)
}

pub fn app_for(db: SqliteDatabase) -> Router {
    routes::create_router(AppState::new(db))
}

/// Create a test app with an empty question table
pub async fn test_app() -> Router {
    let (db, _) = seeded_db(&[]).await;
    app_for(db)
}

/// Create a test app seeded with [`TRIVIA`]
pub async fn trivia_app() -> (Router, Vec<Question>) {
    let (db, created) = seeded_db(TRIVIA).await;
    (app_for(db), created)
}

/// Create a test app whose database has no schema, so every query fails
pub async fn broken_app() -> Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    app_for(db)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, serde_json::to_vec(body).unwrap())
}

pub fn post_raw(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Helper to parse JSON response body
pub async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Assert the uniform error envelope for `code`.
pub fn assert_error(body: &Value, code: u16, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}
