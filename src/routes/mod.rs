pub mod auth;
pub mod submissions;
pub mod submit;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/setup-admin", post(auth::setup_admin))
        .route("/api/admin/login", post(auth::login))
        // Public submissions
        .route("/api/submit", post(submit::submit))
        // Admin dashboard
        .route("/api/submissions", get(submissions::list))
        .route("/api/submissions/{id}", delete(submissions::delete))
}
