//! Route definitions for the public `/submissions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// POST /          -> create (multipart intake)
/// GET  /{token}   -> get_by_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submissions::create))
        .route("/{token}", get(submissions::get_by_token))
}
