//! SQLite QuestionRepository implementation.

use sqlx::SqlitePool;

use super::helpers::{
    QUESTION_COLUMNS, build_filter, build_order_clause, question_from_row, retain_matching,
};
use crate::db::{DbError, DbResult, NewQuestion, Question, QuestionQuery, QuestionRepository};

/// SQLx-backed question repository.
pub struct SqliteQuestionRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> QuestionRepository for SqliteQuestionRepository<'a> {
    async fn create(&self, question: &NewQuestion) -> DbResult<Question> {
        let id = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(self.pool)
        .await?
        .last_insert_rowid();

        Ok(Question {
            id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        })
    }

    async fn list(&self, query: &QuestionQuery) -> DbResult<Vec<Question>> {
        let filter = build_filter(query);
        let sql = format!(
            "SELECT {} FROM questions {} {}",
            QUESTION_COLUMNS,
            filter.clause,
            build_order_clause(query.order)
        );

        let mut sql_query = sqlx::query(&sql);
        for value in filter.binds {
            sql_query = sql_query.bind(value);
        }

        let rows = sql_query.fetch_all(self.pool).await?;
        let mut questions: Vec<Question> = rows.iter().map(question_from_row).collect();

        if let Some(term) = &query.search {
            retain_matching(&mut questions, term);
        }

        Ok(questions)
    }

    async fn count(&self) -> DbResult<usize> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;

        Ok(total as usize)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "Question".to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
