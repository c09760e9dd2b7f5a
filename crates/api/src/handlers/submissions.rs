//! Handlers for the public `/submissions` resource: anonymous intake and
//! token-based retrieval.

use appraisal_core::error::CoreError;
use appraisal_core::intake::SubmissionFields;
use appraisal_core::token::generate_token;
use appraisal_core::upload::store_artifact;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use appraisal_db::models::submission::{CreateSubmission, Submission};
use appraisal_db::repositories::submission_repo::is_token_collision;
use appraisal_db::repositories::SubmissionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Bounded retry budget for token-collision reinserts. With 190-bit tokens a
/// single collision is already exceptional; exhausting this budget is
/// treated as fatal.
const TOKEN_INSERT_ATTEMPTS: u32 = 5;

/// Multipart field name carrying the photograph.
const PHOTO_FIELD: &str = "photo";

/// Creation response: the retrieval token, shown to the submitter exactly
/// once. The system never re-displays it and offers no recovery path.
#[derive(Debug, Serialize)]
pub struct SubmissionReceipt {
    pub token: String,
}

/// The uploaded photograph as received from the multipart stream.
struct UploadedPhoto {
    filename: String,
    content_type: String,
    bytes: axum::body::Bytes,
}

/// POST /api/v1/submissions
///
/// Anonymous intake: validate fields, enforce the upload policy, store the
/// artifact, then insert the record with a freshly minted token. The record
/// is only created after the artifact write succeeds.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<SubmissionReceipt>>)> {
    let (fields, photo) = read_intake_form(multipart).await?;

    fields.validate()?;
    let photo = photo.ok_or_else(|| {
        AppError::Core(CoreError::InvalidSubmission(
            "Please upload a photo of the artwork".into(),
        ))
    })?;

    state
        .config
        .upload_policy
        .check(&photo.content_type, photo.bytes.len() as u64)?;

    let photo_path = store_artifact(&state.config.upload_dir, &photo.filename, &photo.bytes).await?;

    let mut input = CreateSubmission {
        token: String::new(),
        photo_path,
        artist_name: fields.artist_name,
        title: fields.title,
        artwork_date: fields.artwork_date,
        medium: fields.medium,
        dimensions: fields.dimensions,
        edition_size: fields.edition_size,
        provenance: fields.provenance,
        exhibition_history: fields.exhibition_history,
        purchase_price: fields.purchase_price,
    };

    for attempt in 1..=TOKEN_INSERT_ATTEMPTS {
        input.token = generate_token();
        match SubmissionRepo::create(&state.pool, &input).await {
            Ok(created) => {
                tracing::info!(submission_id = created.id, "New submission received");
                return Ok((
                    StatusCode::CREATED,
                    Json(DataResponse {
                        data: SubmissionReceipt { token: input.token },
                    }),
                ));
            }
            Err(err) if is_token_collision(&err) => {
                tracing::warn!(attempt, "Retrieval token collision, regenerating");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(AppError::Core(CoreError::StorageExhausted))
}

/// GET /api/v1/submissions/{token}
///
/// Anonymous retrieval by capability token. A miss is a constant-shape 404
/// that reveals nothing about near-miss tokens.
pub async fn get_by_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<DataResponse<Submission>>> {
    let submission = SubmissionRepo::find_by_token(&state.pool, &token)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
        }))?;
    Ok(Json(DataResponse { data: submission }))
}

/// Drain the multipart stream into descriptive fields plus the photo part.
///
/// Unknown field names are ignored; optional fields submitted blank are
/// stored as NULL.
async fn read_intake_form(
    mut multipart: Multipart,
) -> AppResult<(SubmissionFields, Option<UploadedPhoto>)> {
    let mut fields = SubmissionFields::default();
    let mut photo = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == PHOTO_FIELD {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(multipart_error)?;
            photo = Some(UploadedPhoto {
                filename,
                content_type,
                bytes,
            });
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(multipart_error)?;

        match name.as_str() {
            "artist_name" => fields.artist_name = value,
            "title" => fields.title = value,
            "artwork_date" => fields.artwork_date = value,
            "medium" => fields.medium = value,
            "dimensions" => fields.dimensions = value,
            "edition_size" => fields.edition_size = non_blank(value),
            "provenance" => fields.provenance = non_blank(value),
            "exhibition_history" => fields.exhibition_history = non_blank(value),
            "purchase_price" => fields.purchase_price = non_blank(value),
            _ => {}
        }
    }

    Ok((fields, photo))
}

/// Classify a multipart read failure.
///
/// A stream cut off by the transport body limit means the upload exceeded
/// the ceiling by a wide margin; it gets the same typed rejection the
/// policy check produces instead of a generic bad-request.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::Core(CoreError::InvalidUpload(
            "File is too large".to_string(),
        ));
    }
    AppError::BadRequest(err.to_string())
}

/// Map a blank optional form value to NULL.
fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
