//! Operator session model and DTOs.

use appraisal_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An operator session row from the `operator_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct OperatorSession {
    pub id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new operator session.
pub struct CreateOperatorSession {
    pub token_hash: String,
    pub expires_at: Timestamp,
}
