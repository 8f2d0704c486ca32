//! Document store access for published interview results.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::publish::models::PublishedResult;

/// Persists the published-result document under the candidate's `u_id`.
/// Re-publishing for the same candidate overwrites the previous record.
pub async fn insert_published_result(
    pool: &PgPool,
    record: &PublishedResult,
) -> Result<(), AppError> {
    let doc = serde_json::to_value(record).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize published result: {e}"))
    })?;

    sqlx::query(
        r#"
        INSERT INTO published_results (u_id, doc)
        VALUES ($1, $2)
        ON CONFLICT (u_id) DO UPDATE SET doc = EXCLUDED.doc
        "#,
    )
    .bind(record.u_id)
    .bind(&doc)
    .execute(pool)
    .await?;

    Ok(())
}
