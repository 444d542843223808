use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::Submission;

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    social_handle: &str,
    images: &[String],
) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (id, name, social_handle, images, created_at)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(name)
    .bind(social_handle)
    .bind(Json(images))
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>("SELECT * FROM submissions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Newest first, as the dashboard displays them.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>("SELECT * FROM submissions ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM submissions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
