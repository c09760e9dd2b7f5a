//! Repository for the `operator_sessions` table.

use appraisal_core::types::DbId;
use sqlx::PgPool;

use crate::models::operator_session::{CreateOperatorSession, OperatorSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token_hash, expires_at, created_at";

/// Provides session storage for the single operator credential.
pub struct OperatorSessionRepo;

impl OperatorSessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOperatorSession,
    ) -> Result<OperatorSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO operator_sessions (token_hash, expires_at)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OperatorSession>(&query)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an unexpired session by its token hash.
    pub async fn find_active_by_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<OperatorSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM operator_sessions
             WHERE token_hash = $1 AND expires_at > NOW()"
        );
        sqlx::query_as::<_, OperatorSession>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a single session. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM operator_sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete expired sessions. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM operator_sessions WHERE expires_at < NOW()")
            .execute(pool)
            .await?;
        if result.rows_affected() > 0 {
            tracing::debug!(count = result.rows_affected(), "Removed expired operator sessions");
        }
        Ok(result.rows_affected())
    }
}
