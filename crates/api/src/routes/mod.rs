pub mod health;
pub mod operator;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /submissions                          create (public, multipart)
/// /submissions/{token}                  retrieve by capability token (public)
///
/// /operator/login                       login (public)
/// /operator/logout                      logout (requires session)
/// /operator/submissions                 list / search by artist (requires session)
/// /operator/submissions/{id}            single view (requires session)
/// /operator/submissions/{id}/appraisal  appraisal transition (requires session)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/submissions", submissions::router())
        .nest("/operator", operator::router())
}
