//! Session-based authentication extractor for operator-only handlers.

use appraisal_core::error::CoreError;
use appraisal_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use appraisal_db::repositories::OperatorSessionRepo;

use crate::auth::session::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated operator session extracted from a Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that is operator-only.
/// Anonymous callers (missing, malformed, unknown, or expired tokens) are
/// rejected with `NOT_AUTHORIZED` before the handler body runs.
#[derive(Debug, Clone)]
pub struct OperatorSession {
    /// The session's internal database id (used for logout/revocation).
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for OperatorSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::NotAuthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::NotAuthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let session =
            OperatorSessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(token))
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::NotAuthorized("Invalid or expired session".into()))
                })?;

        Ok(OperatorSession {
            session_id: session.id,
        })
    }
}
