//! Document store access for question sets.
//!
//! One JSONB document per generated `q_id`. Identifiers are fresh per
//! request, so concurrent writes never contend on the same key.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::questions::models::QuestionSet;

/// Persists a freshly generated question set under its identifier.
pub async fn insert_question_set(pool: &PgPool, set: &QuestionSet) -> Result<(), AppError> {
    let doc = serde_json::to_value(set)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize question set: {e}")))?;

    sqlx::query("INSERT INTO questions (q_id, doc) VALUES ($1, $2)")
        .bind(set.q_id)
        .bind(&doc)
        .execute(pool)
        .await?;

    Ok(())
}

/// Returns all stored question sets, oldest first.
pub async fn list_question_sets(pool: &PgPool) -> Result<Vec<QuestionSet>, AppError> {
    let rows: Vec<(serde_json::Value,)> =
        sqlx::query_as("SELECT doc FROM questions ORDER BY created_at")
            .fetch_all(pool)
            .await?;

    rows.into_iter()
        .map(|(doc,)| {
            serde_json::from_value(doc).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Stored question set is corrupt: {e}"))
            })
        })
        .collect()
}
