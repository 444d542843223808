use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::Admin;

pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<Admin, sqlx::Error> {
    sqlx::query_as::<_, Admin>(
        "INSERT INTO admins (id, username, password_hash, created_at)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(username)
    .bind(password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}
