use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::SharedState;

/// Verified admin identity, extracted from a Bearer token.
///
/// A missing or non-Bearer Authorization header rejects with 401 so the
/// client knows to show the login screen; a present-but-bad token rejects
/// with 403 so it knows to discard what it has.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub admin_id: Uuid,
    pub username: String,
}

impl FromRequestParts<SharedState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let value = header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Authentication required".to_string()))?;

        let token = value
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let claims = jwt::decode_token(token, &state.config.jwt_secret)
            .map_err(|_| AppError::Forbidden("Invalid or expired token".to_string()))?;

        Ok(AuthAdmin {
            admin_id: claims.sub,
            username: claims.username,
        })
    }
}
