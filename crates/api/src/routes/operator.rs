//! Route definitions for the `/operator` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::operator;
use crate::state::AppState;

/// Routes mounted at `/operator`.
///
/// ```text
/// POST /login                         -> login
/// POST /logout                        -> logout (requires session)
/// GET  /submissions                   -> list / search (requires session)
/// GET  /submissions/{id}              -> get_by_id (requires session)
/// PUT  /submissions/{id}/appraisal    -> appraise (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(operator::login))
        .route("/logout", post(operator::logout))
        .route("/submissions", get(operator::list))
        .route("/submissions/{id}", get(operator::get_by_id))
        .route("/submissions/{id}/appraisal", put(operator::appraise))
}
