use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::upload::parser;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub submission: Submission,
}

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let form = parser::parse_submit_form(&headers, body).await?;

    let name = form.name.trim();
    let social_handle = form.social_handle.trim();

    if name.is_empty() || social_handle.is_empty() {
        return Err(AppError::BadRequest(
            "Name and social handle are required".to_string(),
        ));
    }

    if form.images.is_empty() {
        return Err(AppError::BadRequest(
            "At least one image is required".to_string(),
        ));
    }

    let mut stored = Vec::with_capacity(form.images.len());
    for image in &form.images {
        let stored_ref = state
            .uploads
            .save(&image.original_name, &image.bytes)
            .await?;
        stored.push(stored_ref);
    }

    let submission = db::submissions::create(&state.pool, name, social_handle, &stored).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            message: "Submission successful".to_string(),
            submission,
        }),
    ))
}
