//! Handlers for the operator surface: login, logout, review, and the
//! appraisal transition. Everything except login requires an authenticated
//! session.

use appraisal_core::error::CoreError;
use appraisal_core::types::{DbId, Timestamp};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use appraisal_db::models::operator_session::CreateOperatorSession;
use appraisal_db::models::submission::Submission;
use appraisal_db::repositories::{OperatorSessionRepo, SubmissionRepo};

use crate::auth::session::{credential_matches, generate_session_token};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::OperatorSession;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /operator/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub session_token: String,
    pub expires_at: Timestamp,
}

/// Query parameters for the submission list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Artist-name substring filter; absent or empty returns everything.
    pub artist: Option<String>,
}

/// Request body for the appraisal transition.
///
/// All three values are opaque strings at this layer; no numeric validation
/// and no low-vs-high ordering check, by accepted business behavior.
#[derive(Debug, Deserialize)]
pub struct AppraiseRequest {
    pub appraisal: String,
    pub estimate_low: String,
    pub estimate_high: String,
}

// ---------------------------------------------------------------------------
// Session handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/operator/login
///
/// Exchange the shared operator secret for an opaque session token. Failed
/// attempts get no lockout or backoff; there is a single trusted operator.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    if !credential_matches(&input.password, &state.config.operator_password) {
        tracing::warn!("Operator login rejected");
        return Err(AppError::Core(CoreError::AuthenticationFailed));
    }

    let (plaintext, hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::minutes(state.config.session_expiry_mins);

    OperatorSessionRepo::create(
        &state.pool,
        &CreateOperatorSession {
            token_hash: hash,
            expires_at,
        },
    )
    .await?;

    tracing::info!("Operator session opened");

    Ok(Json(DataResponse {
        data: LoginResponse {
            session_token: plaintext,
            expires_at,
        },
    }))
}

/// POST /api/v1/operator/logout
///
/// Revoke the presenting session. Returns 204 No Content.
pub async fn logout(
    session: OperatorSession,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    OperatorSessionRepo::delete(&state.pool, session.session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Review handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/operator/submissions?artist=
///
/// List all submissions newest-first, optionally filtered by artist-name
/// substring.
pub async fn list(
    _session: OperatorSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    let submissions = match params.artist.as_deref() {
        Some(needle) if !needle.is_empty() => {
            SubmissionRepo::search_by_artist(&state.pool, needle).await?
        }
        _ => SubmissionRepo::list_all(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: submissions }))
}

/// GET /api/v1/operator/submissions/{id}
pub async fn get_by_id(
    _session: OperatorSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Submission>>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
        }))?;
    Ok(Json(DataResponse { data: submission }))
}

/// PUT /api/v1/operator/submissions/{id}/appraisal
///
/// Overwrite the three appraisal fields. Subsequent calls overwrite again
/// (last-writer-wins, no history); a nonexistent id is an idempotent no-op
/// success since only the operator can reach this path.
pub async fn appraise(
    _session: OperatorSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AppraiseRequest>,
) -> AppResult<StatusCode> {
    let updated = SubmissionRepo::set_appraisal(
        &state.pool,
        id,
        &input.appraisal,
        &input.estimate_low,
        &input.estimate_high,
    )
    .await?;

    if updated == 0 {
        tracing::debug!(submission_id = id, "Appraisal write matched no record");
    } else {
        tracing::info!(submission_id = id, "Appraisal recorded");
    }

    Ok(StatusCode::NO_CONTENT)
}
