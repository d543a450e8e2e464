//! Persistence Sink — summary rows in the `pdf_summaries` table.
//! Storage failures propagate to the caller; there is no local recovery.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::summary::SummaryRow;
use crate::summaries::pipeline::SummaryResult;

/// Inserts the finished summary and returns the storage-assigned id.
pub async fn insert_summary(
    pool: &PgPool,
    user_id: &str,
    file_url: &str,
    file_name: &str,
    result: &SummaryResult,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO pdf_summaries
            (user_id, original_file_url, summary_text, title, file_name, status)
        VALUES ($1, $2, $3, $4, $5, 'completed')
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(file_url)
    .bind(&result.summary_text)
    .bind(&result.title)
    .bind(file_name)
    .fetch_one(pool)
    .await
}

/// All summaries owned by the user, newest first.
pub async fn list_summaries(pool: &PgPool, user_id: &str) -> Result<Vec<SummaryRow>, sqlx::Error> {
    sqlx::query_as::<_, SummaryRow>(
        "SELECT * FROM pdf_summaries WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Owner-scoped detail lookup.
pub async fn get_summary(
    pool: &PgPool,
    id: Uuid,
    user_id: &str,
) -> Result<Option<SummaryRow>, sqlx::Error> {
    sqlx::query_as::<_, SummaryRow>("SELECT * FROM pdf_summaries WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Owner-scoped delete. Returns false when no matching row existed.
pub async fn delete_summary(pool: &PgPool, id: Uuid, user_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pdf_summaries WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
