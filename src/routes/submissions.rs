use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::extractor::AuthAdmin;
use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

pub async fn list(
    _auth: AuthAdmin,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = db::submissions::list_all(&state.pool).await?;
    Ok(Json(submissions))
}

pub async fn delete(
    _auth: AuthAdmin,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id =
        Uuid::parse_str(&id).map_err(|_| AppError::BadRequest("Invalid submission id".to_string()))?;

    let submission = db::submissions::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

    // Best effort: a file that is already gone must not block the delete.
    for stored_ref in submission.images.iter() {
        if let Err(e) = state.uploads.remove(stored_ref).await {
            tracing::warn!("Failed to remove uploaded file {stored_ref}: {e}");
        }
    }

    db::submissions::delete(&state.pool, id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Submission deleted successfully".to_string(),
        id,
    }))
}
