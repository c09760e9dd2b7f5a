//! Submission model and DTOs.

use appraisal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A submission row from the `submissions` table.
///
/// The retrieval token is deliberately excluded from serialization: it is
/// shown to the submitter exactly once at creation and never re-displayed,
/// not even to the operator.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub token: String,
    pub photo_path: String,
    pub artist_name: String,
    pub title: String,
    pub artwork_date: String,
    pub medium: String,
    pub dimensions: String,
    pub edition_size: Option<String>,
    pub provenance: Option<String>,
    pub exhibition_history: Option<String>,
    pub purchase_price: Option<String>,
    pub appraisal: Option<String>,
    pub estimate_low: Option<String>,
    pub estimate_high: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new submission.
#[derive(Debug)]
pub struct CreateSubmission {
    pub token: String,
    pub photo_path: String,
    pub artist_name: String,
    pub title: String,
    pub artwork_date: String,
    pub medium: String,
    pub dimensions: String,
    pub edition_size: Option<String>,
    pub provenance: Option<String>,
    pub exhibition_history: Option<String>,
    pub purchase_price: Option<String>,
}
