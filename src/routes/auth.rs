use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Create the default admin account if it does not exist yet.
/// Returns whether a new account was created.
pub async fn ensure_default_admin(pool: &SqlitePool) -> Result<bool, AppError> {
    if db::admins::find_by_username(pool, DEFAULT_ADMIN_USERNAME)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    let pw_hash = password::hash(DEFAULT_ADMIN_PASSWORD).map_err(AppError::Internal)?;

    // The UNIQUE constraint on usernames backstops concurrent setup calls.
    match db::admins::create(pool, DEFAULT_ADMIN_USERNAME, &pw_hash).await {
        Ok(_) => Ok(true),
        Err(sqlx::Error::Database(ref db_err)) if db_err.is_unique_violation() => Ok(false),
        Err(e) => Err(AppError::Database(e)),
    }
}

pub async fn setup_admin(
    State(state): State<SharedState>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let created = ensure_default_admin(&state.pool).await?;
    if !created {
        return Err(AppError::BadRequest("Admin already exists".to_string()));
    }

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "Admin user created successfully".to_string(),
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let admin = db::admins::find_by_username(&state.pool, &req.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid =
        password::verify(&req.password, &admin.password_hash).map_err(AppError::Internal)?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let claims = Claims::new(admin.id, admin.username.clone());
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
    }))
}
