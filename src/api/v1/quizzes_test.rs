//! Integration tests for the quiz endpoint.

use std::collections::HashSet;

use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::test_support::*;

fn quiz(previous: Value, category: Value) -> Value {
    json!({
        "previous_questions": previous,
        "quiz_category": {"type": "click", "id": category}
    })
}

fn ids_in(created: &[crate::db::Question], category: i64) -> Vec<i64> {
    created
        .iter()
        .filter(|q| q.category == category)
        .map(|q| q.id)
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_all_categories_returns_a_stored_question() {
    let (app, created) = trivia_app().await;

    let response = app
        .oneshot(post_json("/quizzes", &quiz(json!([]), json!(0))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);

    let id = body["question"]["id"].as_i64().expect("Expected a question");
    let stored = created.iter().find(|q| q.id == id).expect("Unknown id");
    assert_eq!(body["question"]["question"], stored.question.as_str());
    assert_eq!(body["question"]["answer"], stored.answer.as_str());
    assert_eq!(body["question"]["category"], stored.category);
    assert_eq!(body["question"]["difficulty"], stored.difficulty);
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_category_draws_only_from_that_category() {
    let (app, created) = trivia_app().await;
    let history = ids_in(&created, 4);

    for _ in 0..10 {
        let response = app
            .clone()
            .oneshot(post_json("/quizzes", &quiz(json!([]), json!(4))))
            .await
            .unwrap();
        let body = json_body(response).await;

        assert_eq!(body["question"]["category"], 4);
        assert!(history.contains(&body["question"]["id"].as_i64().unwrap()));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_walks_a_category_without_repeats() {
    let (app, created) = trivia_app().await;
    let expected: HashSet<i64> = ids_in(&created, 2).into_iter().collect();

    let mut previous: Vec<i64> = Vec::new();
    for _ in 0..expected.len() {
        let response = app
            .clone()
            .oneshot(post_json("/quizzes", &quiz(json!(previous), json!(2))))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["success"], true);

        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id), "question {} repeated", id);
        previous.push(id);
    }

    assert_eq!(previous.into_iter().collect::<HashSet<_>>(), expected);
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_exhausted_pool_reports_false_with_200() {
    let (app, created) = trivia_app().await;
    let previous = ids_in(&created, 6);

    let response = app
        .oneshot(post_json("/quizzes", &quiz(json!(previous), json!(6))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "question": false})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_on_empty_table_is_exhausted() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json("/quizzes", &quiz(json!([]), json!(0))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["question"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_accepts_numeric_strings() {
    let (app, created) = trivia_app().await;
    let sports = ids_in(&created, 6);

    let response = app
        .oneshot(post_json(
            "/quizzes",
            &quiz(json!([sports[0].to_string()]), json!("6")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["question"]["id"], sports[1]);
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_unknown_category_is_400() {
    let (app, _) = trivia_app().await;

    for category in [json!(7), json!(-1), json!(1000)] {
        let response = app
            .clone()
            .oneshot(post_json("/quizzes", &quiz(json!([]), category.clone())))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "category: {}",
            category
        );
        assert_error(&json_body(response).await, 400, "bad request");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_malformed_body_is_400() {
    let (app, _) = trivia_app().await;

    let bodies = [
        json!({"quiz_category": {"id": 0}}),
        json!({"previous_questions": []}),
        json!({"previous_questions": [], "quiz_category": {}}),
        json!({"previous_questions": ["x"], "quiz_category": {"id": 0}}),
        json!({"previous_questions": [], "quiz_category": {"id": "all"}}),
    ];

    for body in bodies {
        let response = app
            .clone()
            .oneshot(post_json("/quizzes", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }

    let response = app.oneshot(post_raw("/quizzes", "[")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_storage_failure_is_400() {
    let app = broken_app().await;

    let response = app
        .oneshot(post_json("/quizzes", &quiz(json!([]), json!(0))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_string_zero_selects_every_category() {
    let (app, created) = trivia_app().await;
    let all_but_last: Vec<i64> = created[..created.len() - 1].iter().map(|q| q.id).collect();
    let last = created[created.len() - 1].clone();

    let response = app
        .oneshot(post_json("/quizzes", &quiz(json!(all_but_last), json!("0"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], last.id);
    assert_eq!(body["question"]["category"], last.category);
}
