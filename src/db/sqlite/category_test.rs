//! Tests for SqliteCategoryRepository.

use crate::db::{CategoryRepository, Database, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn category_list_is_ordered_by_id() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    sqlx::query("INSERT INTO categories (id, type) VALUES (10, 'Music')")
        .execute(db.pool())
        .await
        .unwrap();

    let categories = db.categories().list().await.expect("List should succeed");
    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 10]);
    assert_eq!(categories.last().unwrap().kind, "Music");
}

#[tokio::test(flavor = "multi_thread")]
async fn category_list_fails_without_schema() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    let result = db.categories().list().await;
    assert!(matches!(result, Err(crate::db::DbError::Database { .. })));
}
